//! Reads armory data files from a directory.
//!
//! A data directory holds `catalog.ron`, `armory.ron` and optionally
//! `stock.ron`.

use std::fs;
use std::path::{Path, PathBuf};

use armory_core::catalog::CatalogRegistry;
use armory_core::data::{ArmoryConfig, StockData};
use armory_core::error::ArmoryError;
use thiserror::Error;
use tracing::debug;

/// Catalog file name.
pub const CATALOG_FILE: &str = "catalog.ron";
/// Settings file name.
pub const CONFIG_FILE: &str = "armory.ron";
/// Stock snapshot file name.
pub const STOCK_FILE: &str = "stock.ron";

/// Errors raised by the tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// File could not be read or written.
    #[error("IO error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// File content was rejected.
    #[error(transparent)]
    Data(#[from] ArmoryError),

    /// Snapshot could not be serialized.
    #[error("Failed to write stock snapshot: {0}")]
    Serialize(#[from] ron::Error),
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;

fn read(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn source_name(path: &Path) -> String {
    path.display().to_string()
}

/// Load and validate `catalog.ron`.
pub fn load_catalog(dir: &Path) -> Result<CatalogRegistry> {
    let path = dir.join(CATALOG_FILE);
    let content = read(&path)?;
    Ok(CatalogRegistry::from_ron_str(&content, &source_name(&path))?)
}

/// Load `armory.ron`, falling back to defaults when the file is absent.
pub fn load_config(dir: &Path) -> Result<ArmoryConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        debug!("No {CONFIG_FILE} in {}, using defaults", dir.display());
        return Ok(ArmoryConfig::default());
    }
    let content = read(&path)?;
    let config = ArmoryConfig::from_ron_str(&content, &source_name(&path))?;
    config.validate()?;
    Ok(config)
}

/// Load `stock.ron`, or an empty snapshot when the file is absent.
pub fn load_stock(dir: &Path) -> Result<StockData> {
    let path = dir.join(STOCK_FILE);
    if !path.exists() {
        return Ok(StockData::default());
    }
    let content = read(&path)?;
    Ok(StockData::from_ron_str(&content, &source_name(&path))?)
}

/// Write a stock snapshot as pretty RON.
pub fn write_stock(path: &Path, stock: &StockData) -> Result<()> {
    let content = ron::ser::to_string_pretty(stock, ron::ser::PrettyConfig::default())?;
    fs::write(path, content).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })
}
