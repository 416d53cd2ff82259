//! Data structures for armory configuration.
//!
//! This module contains pure data structures loaded from RON text: the
//! item catalog, the armory settings and stock snapshots.
//!
//! **Note:** This module contains no IO - callers read the files and hand
//! the text over. File loading is handled by `armory_tools`.

mod armory_config;
mod catalog_data;
mod stock_data;

pub use armory_config::{ArmoryConfig, ThresholdEntry};
pub use catalog_data::CatalogData;
pub use stock_data::{StockData, StockEntry};

use serde::de::DeserializeOwned;

use crate::error::{ArmoryError, Result};

/// Parse RON text, tagging errors with where the text came from.
pub fn parse_ron<T: DeserializeOwned>(content: &str, source_name: &str) -> Result<T> {
    ron::from_str(content).map_err(|e| ArmoryError::DataParseError {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}
