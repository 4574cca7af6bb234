//! Column record the indexer assigns positions and widths to.

use serde::{Deserialize, Serialize};

use crate::width::Width;

/// One participant in the table layout: a data column, a header cell, or a
/// column-group declaration.
///
/// All fields stay public and mutable because the indexer overwrites
/// `col_index` and `width` as a declaration pass progresses.
///
/// # Examples
///
/// ```
/// use tabledom::{Column, Width};
///
/// let column = Column::new().width(Width::Px(100.0));
/// let placeholder = Column::new().row_span(0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Logical position among the data columns. Assigned by the indexer,
    /// except for row cells in manual-index mode where the caller sets it.
    pub col_index: usize,
    /// Declared width, or the computed share once distribution has run.
    /// `None` means the column has no width yet.
    pub width: Option<Width>,
    /// How many logical slots a body cell occupies.
    pub col_span: u16,
    /// How many rows the cell occupies. Zero marks a placeholder for a cell
    /// spanning in from the row above; it occupies no slot.
    pub row_span: u16,
    /// How many logical slots a header cell occupies.
    pub header_col_span: u16,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            col_index: 0,
            width: None,
            col_span: 1,
            row_span: 1,
            header_col_span: 1,
        }
    }
}

impl Column {
    /// Create a column with single-slot spans and no width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit width.
    pub fn width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    /// Pre-set the column index (only honored for row cells when the table
    /// runs with manual indexes).
    pub fn col_index(mut self, col_index: usize) -> Self {
        self.col_index = col_index;
        self
    }

    /// Set the body-cell column span.
    pub fn col_span(mut self, span: u16) -> Self {
        self.col_span = span;
        self
    }

    /// Set the row span. Zero makes the cell a placeholder.
    pub fn row_span(mut self, span: u16) -> Self {
        self.row_span = span;
        self
    }

    /// Set the header-cell column span.
    pub fn header_col_span(mut self, span: u16) -> Self {
        self.header_col_span = span;
        self
    }
}
