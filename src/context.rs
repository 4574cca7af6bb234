//! Column index reconciliation across data, header, and group columns.

use crate::column::Column;
use crate::table::TableController;
use crate::width::{RemainderWidth, Width};

/// Assigns stable positional indices to the columns of a table widget and
/// reconciles them across the three parallel column representations: the
/// flat data columns, the (possibly multi-row) header columns, and the
/// column-group declarations used for fixed/scrollable layout.
///
/// The owning table controller declares columns in a fixed left-to-right
/// order (groups, then header rows top to bottom, then data columns, then
/// row cells); every registration mutates the indexer immediately, and
/// [`header_column_initialized`] copies the authoritative data-column
/// indices back onto the headers once the counts line up. The whole indexer
/// is rebuilt from scratch whenever the table re-declares its columns.
///
/// [`header_column_initialized`]: ColumnIndexer::header_column_initialized
#[derive(Debug, Default)]
pub struct ColumnIndexer {
    columns: Vec<Column>,
    header_columns: Vec<Column>,
    group_columns: Vec<Column>,
    notified: bool,
}

impl ColumnIndexer {
    /// Create an empty indexer for a fresh declaration pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// The data columns, in declaration order. Authoritative for `col_index`.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The header columns, in declaration order across all header rows.
    pub fn header_columns(&self) -> &[Column] {
        &self.header_columns
    }

    /// The column-group declarations, in declaration order.
    pub fn group_columns(&self) -> &[Column] {
        &self.group_columns
    }

    /// Register a data column. `None` is a no-op.
    ///
    /// The index is the column's position in the data-column list at the
    /// time of addition, so a full pass yields gap-free indices `0..n`.
    pub fn add_column(&mut self, column: Option<Column>) {
        let Some(mut column) = column else { return };

        column.col_index = self.columns.len();
        log::trace!("[columns] data column -> index {}", column.col_index);
        self.columns.push(column);
    }

    /// Register a header cell. `None` is a no-op.
    ///
    /// Header cells arrive in the same left-to-right order as data columns,
    /// so the ordinal position is the binding: the cell adopts the index of
    /// the data column at the same position. When more header cells have
    /// registered than data columns exist (incomplete or malformed
    /// declarations), it falls back to the last valid index, or 0.
    pub fn add_header_column(&mut self, column: Option<Column>) {
        let Some(mut column) = column else { return };

        // A zero row-span marks a placeholder for a cell spanning in from
        // the row above; it occupies no header slot.
        if column.row_span == 0 {
            column.header_col_span = 0;
        }

        column.col_index = match self.columns.get(self.header_columns.len()) {
            Some(corresponding) => corresponding.col_index,
            None => self.columns.len().saturating_sub(1),
        };

        log::trace!("[columns] header column -> index {}", column.col_index);
        self.header_columns.push(column);
    }

    /// Register a `<colgroup>`-style layout declaration. `None` is a no-op.
    ///
    /// The group adopts the index of the most recently declared data column
    /// (0 when none exist yet). When the table has a fixed scroll width,
    /// every data column still lacking a width is assigned an even share of
    /// whatever the explicitly sized columns leave over; this reruns on
    /// every group registration as more widths become known, and never
    /// touches a width that is already set. A width-less group column then
    /// inherits the width of the data column sharing its index.
    pub fn add_col_group(&mut self, column: Option<Column>, table: &dyn TableController) {
        let Some(mut column) = column else { return };

        column.col_index = self.columns.last().map_or(0, |last| last.col_index);

        if let Some(scroll_x) = table.scroll_x() {
            self.distribute_scroll_width(scroll_x);
        }

        if column.width.is_none() {
            if let Some(data) = self.columns.iter().find(|c| c.col_index == column.col_index) {
                column.width = data.width.clone();
            }
        }

        log::trace!("[columns] group column -> index {}", column.col_index);
        self.group_columns.push(column);
    }

    /// Register a cell embedded directly in a body row. `None` is a no-op.
    ///
    /// In auto-index mode the cell adopts the index of the rightmost data
    /// column (0 when none exist). In manual mode the caller has pre-set
    /// `col_index`; an out-of-range value is clamped to the last valid
    /// index rather than rejected. Row cells belong to their rows, so the
    /// indexer mutates the cell in place and stores nothing.
    pub fn add_row_column(&self, column: Option<&mut Column>, table: &dyn TableController) {
        let Some(column) = column else { return };

        if column.row_span == 0 {
            column.col_span = 0;
        }

        if table.auto_col_indexes() {
            column.col_index = self.columns.last().map_or(0, |last| last.col_index);
        } else if column.col_index >= self.columns.len() {
            column.col_index = self.columns.len().saturating_sub(1);
        }
    }

    /// Synchronize header indices once every header row has registered.
    ///
    /// Invoked once per header-column initialization event. It only
    /// triggers when header and data counts match one-to-one: the data
    /// columns are authoritative by then, so their indices are copied onto
    /// the headers position by position, and the controller is notified
    /// that columns are fully initialized. The notification is latched —
    /// at most one per declaration pass — and calls while the counts still
    /// differ are no-ops ("not yet ready", never an error).
    pub fn header_column_initialized(&mut self, table: &mut dyn TableController) {
        if self.notified || self.header_columns.len() != self.columns.len() {
            return;
        }

        for (header, column) in self.header_columns.iter_mut().zip(&self.columns) {
            header.col_index = column.col_index;
        }

        self.notified = true;
        log::debug!("[columns] {} columns initialized", self.columns.len());
        table.on_column_initialized();
    }

    /// Fill every width-less data column with an even share of the scroll
    /// width left over after the explicitly sized columns.
    ///
    /// Columns filled by an earlier run count as sized, so reruns are
    /// effectively idempotent.
    fn distribute_scroll_width(&mut self, scroll_x: f64) {
        let share = self.columns.iter().filter(|c| c.width.is_none()).count();
        if share == 0 {
            return;
        }

        let explicit: Vec<Width> = self
            .columns
            .iter()
            .filter_map(|c| c.width.clone())
            .collect();
        log::debug!(
            "[columns] distributing {scroll_x}px across {share} unsized columns ({} sized)",
            explicit.len()
        );

        let remainder = Width::Remainder(RemainderWidth {
            scroll_x,
            explicit,
            share,
        });
        for column in self.columns.iter_mut().filter(|c| c.width.is_none()) {
            column.width = Some(remainder.clone());
        }
    }
}
