//! Data validation utilities.

use std::path::Path;

use armory_core::catalog::ItemCatalog;
use tracing::info;

use crate::loader::{self, Result};

/// Summary of a validated data directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Catalog items.
    pub items: usize,
    /// Configured thresholds.
    pub thresholds: usize,
    /// Units in the stock snapshot.
    pub stocked_units: u64,
}

/// Validate all RON data files in a directory.
///
/// # Errors
///
/// Returns an error if any data file fails to parse, breaks a data rule,
/// or if the stock snapshot names items missing from the catalog.
pub fn validate_data_directory(path: &Path) -> Result<ValidationSummary> {
    let catalog = loader::load_catalog(path)?;
    let config = loader::load_config(path)?;
    let stock = loader::load_stock(path)?.to_pool(&catalog)?;

    let thrown = catalog.items().filter(|item| item.is_thrown_weapon()).count();
    info!(
        "{} catalog items ({thrown} throwing weapons), {} thresholds",
        catalog.len(),
        config.thresholds.len()
    );

    Ok(ValidationSummary {
        items: catalog.len(),
        thresholds: config.thresholds.len(),
        stocked_units: stock.total_units(),
    })
}
