//! Column Declaration Walkthrough
//!
//! Drives one full declaration pass the way an owning table controller
//! would: data columns, column groups (which trigger width distribution
//! against the fixed scroll width), a header row, the synchronization
//! step, and finally a row-embedded cell.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{Column, ColumnIndexer, TableController, Width};

/// The owning table, reduced to the capabilities the indexer consumes.
struct DemoTable {
    scroll_x: Option<f64>,
    columns_ready: bool,
}

impl TableController for DemoTable {
    fn scroll_x(&self) -> Option<f64> {
        self.scroll_x
    }

    fn on_column_initialized(&mut self) {
        self.columns_ready = true;
    }
}

fn main() {
    let log_file = File::create("tabledom-demo.log").expect("create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file).expect("init logger");

    let mut table = DemoTable {
        scroll_x: Some(600.0),
        columns_ready: false,
    };
    let mut indexer = ColumnIndexer::new();

    // Four data columns; two sized, two left for the distribution to fill.
    indexer.add_column(Some(Column::new().width(Width::Px(200.0))));
    indexer.add_column(Some(Column::new().width(Width::Percent(20.0))));
    indexer.add_column(Some(Column::new()));
    indexer.add_column(Some(Column::new()));

    // One group declaration per data column. The first one runs the width
    // distribution against the 600px viewport.
    for _ in 0..4 {
        indexer.add_col_group(Some(Column::new()), &table);
    }

    // Single header row, one cell per column; the sync step fires once the
    // header count reaches the data count.
    for _ in 0..4 {
        indexer.add_header_column(Some(Column::new()));
        indexer.header_column_initialized(&mut table);
    }

    // A cell embedded directly in a body row.
    let mut row_cell = Column::new();
    indexer.add_row_column(Some(&mut row_cell), &table);

    println!("columns ready: {}", table.columns_ready);
    for column in indexer.columns() {
        let width = column
            .width
            .as_ref()
            .map_or_else(|| "unset".to_string(), ToString::to_string);
        println!("  column {} -> {width}", column.col_index);
    }
    println!("row cell index: {}", row_cell.col_index);
}
