pub mod column;
pub mod context;
pub mod table;
pub mod width;

pub use column::Column;
pub use context::ColumnIndexer;
pub use table::TableController;
pub use width::{RemainderWidth, Width};
