//! Order dataset model: the order record, CSV loading and the in-memory table.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod order;

pub use dataset::{Dataset, Inconsistency};
pub use error::LoadError;
pub use loader::{DEFAULT_DATE_FORMATS, LoadOptions, LoadReport, LoadedDataset, load_orders, load_orders_from_reader};
pub use order::OrderRecord;

// Re-export tracing for use in this crate
pub use tracing;
