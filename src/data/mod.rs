//! Data module - feed loading and cleaning

mod cleaner;
mod loader;
mod record;

pub use cleaner::{CleanerError, DataCleaner};
pub use loader::{DataLoader, LoaderError};
pub use record::{SaleRecord, COL_PRICE, COL_PRODUCT, COL_QTY, COL_REGION, COL_REVENUE};
