//! Capability surface the owning table exposes to the column indexer.

/// Contract between the column indexer and the table controller driving it.
///
/// Kept deliberately narrow — the indexer needs the scroll-width setting,
/// the index-assignment mode, and somewhere to report readiness, nothing
/// else. Default bodies mean a test double only overrides what it observes.
pub trait TableController {
    /// Fixed pixel width of the horizontally scrollable viewport, when the
    /// table has one. Drives width distribution on group registration.
    fn scroll_x(&self) -> Option<f64> {
        None
    }

    /// Whether row cells derive their column index from declaration order.
    /// When false the caller pre-sets `col_index` on each row cell and the
    /// indexer only clamps it into range.
    fn auto_col_indexes(&self) -> bool {
        true
    }

    /// Readiness signal: every header column now carries the index of its
    /// corresponding data column. Fired at most once per declaration pass.
    fn on_column_initialized(&mut self) {}
}
