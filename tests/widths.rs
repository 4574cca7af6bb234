use tabledom::{Column, ColumnIndexer, RemainderWidth, TableController, Width};

/// Table controller double with a configurable scroll width.
struct StubTable {
    scroll_x: Option<f64>,
}

impl TableController for StubTable {
    fn scroll_x(&self) -> Option<f64> {
        self.scroll_x
    }
}

fn indexer_with_widths(widths: &[Option<Width>]) -> ColumnIndexer {
    let mut indexer = ColumnIndexer::new();
    for width in widths {
        let mut column = Column::new();
        column.width = width.clone();
        indexer.add_column(Some(column));
    }
    indexer
}

// ============================================================================
// Scroll Width Distribution
// ============================================================================

#[test]
fn test_unsized_columns_split_the_remaining_scroll_width() {
    let mut indexer = indexer_with_widths(&[None, Some(Width::Px(100.0)), None]);
    let table = StubTable {
        scroll_x: Some(400.0),
    };

    indexer.add_col_group(Some(Column::new()), &table);

    let expected = Width::Remainder(RemainderWidth {
        scroll_x: 400.0,
        explicit: vec![Width::Px(100.0)],
        share: 2,
    });
    assert_eq!(indexer.columns()[0].width, Some(expected.clone()));
    assert_eq!(indexer.columns()[2].width, Some(expected.clone()));
    assert_eq!(expected.to_string(), "calc((400px - (100px)) / 2)");
}

#[test]
fn test_explicit_widths_are_never_overwritten() {
    let mut indexer = indexer_with_widths(&[None, Some(Width::Px(100.0)), None]);
    let table = StubTable {
        scroll_x: Some(400.0),
    };

    indexer.add_col_group(Some(Column::new()), &table);

    assert_eq!(
        indexer.columns()[1].width,
        Some(Width::Px(100.0)),
        "sized column keeps its declared width"
    );
}

#[test]
fn test_no_distribution_without_a_scroll_width() {
    let mut indexer = indexer_with_widths(&[None, None]);
    let table = StubTable { scroll_x: None };

    indexer.add_col_group(Some(Column::new()), &table);

    assert_eq!(indexer.columns()[0].width, None);
    assert_eq!(indexer.columns()[1].width, None);
}

#[test]
fn test_all_unsized_columns_subtract_the_zero_token() {
    let mut indexer = indexer_with_widths(&[None, None, None]);
    let table = StubTable {
        scroll_x: Some(300.0),
    };

    indexer.add_col_group(Some(Column::new()), &table);

    let width = indexer.columns()[0].width.clone().unwrap();
    assert_eq!(width.to_string(), "calc((300px - (0px)) / 3)");
}

#[test]
fn test_percent_widths_join_the_subtracted_sum() {
    let mut indexer =
        indexer_with_widths(&[Some(Width::Percent(30.0)), None, Some(Width::Px(100.0))]);
    let table = StubTable {
        scroll_x: Some(500.0),
    };

    indexer.add_col_group(Some(Column::new()), &table);

    let width = indexer.columns()[1].width.clone().unwrap();
    assert_eq!(width.to_string(), "calc((500px - (30% + 100px)) / 1)");
}

#[test]
fn test_repeated_group_registration_leaves_widths_stable() {
    let mut indexer = indexer_with_widths(&[None, Some(Width::Px(100.0)), None]);
    let table = StubTable {
        scroll_x: Some(400.0),
    };

    indexer.add_col_group(Some(Column::new()), &table);
    let after_first: Vec<Option<Width>> =
        indexer.columns().iter().map(|c| c.width.clone()).collect();

    // Filled columns now count as sized, so the rerun changes nothing.
    indexer.add_col_group(Some(Column::new()), &table);
    let after_second: Vec<Option<Width>> =
        indexer.columns().iter().map(|c| c.width.clone()).collect();

    assert_eq!(after_first, after_second);
}

// ============================================================================
// Group Column Width Inheritance
// ============================================================================

#[test]
fn test_width_less_group_column_inherits_from_its_data_column() {
    let mut indexer = indexer_with_widths(&[Some(Width::Px(80.0)), None]);
    let table = StubTable {
        scroll_x: Some(400.0),
    };

    indexer.add_col_group(Some(Column::new()), &table);

    // The group adopted the last data column's index (1), whose width was
    // just computed by the distribution above.
    let group = &indexer.group_columns()[0];
    assert_eq!(group.col_index, 1);
    assert_eq!(group.width, indexer.columns()[1].width);
}

#[test]
fn test_group_column_keeps_its_declared_width() {
    let mut indexer = indexer_with_widths(&[Some(Width::Px(80.0))]);
    let table = StubTable { scroll_x: None };

    indexer.add_col_group(Some(Column::new().width(Width::Px(40.0))), &table);

    assert_eq!(indexer.group_columns()[0].width, Some(Width::Px(40.0)));
}
