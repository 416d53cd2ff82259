//! Stock snapshot definition, used to seed a pool for offline runs.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemCatalog;
use crate::error::{ArmoryError, Result};
use crate::item::ItemId;
use crate::pool::EquipmentPool;

/// Units of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Catalog item.
    pub item: ItemId,
    /// Units stocked.
    pub count: u32,
}

/// List of item counts.
///
/// # Example RON
///
/// ```ron
/// StockData(
///     entries: [
///         (item: "padded_coif", count: 12),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockData {
    /// Stock lines. Repeated items accumulate.
    #[serde(default)]
    pub entries: Vec<StockEntry>,
}

impl StockData {
    /// Parse a stock snapshot from RON text.
    pub fn from_ron_str(content: &str, source_name: &str) -> Result<Self> {
        super::parse_ron(content, source_name)
    }

    /// Snapshot the current content of a pool.
    #[must_use]
    pub fn from_pool(pool: &EquipmentPool) -> Self {
        Self {
            entries: pool
                .iter()
                .map(|entry| StockEntry {
                    item: entry.item().id.clone(),
                    count: entry.count(),
                })
                .collect(),
        }
    }

    /// Build a pool from this snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry names an item missing from the catalog.
    pub fn to_pool<C>(&self, catalog: &C) -> Result<EquipmentPool>
    where
        C: ItemCatalog + ?Sized,
    {
        let mut pool = EquipmentPool::new();
        for entry in &self.entries {
            let item = catalog
                .get(&entry.item)
                .ok_or_else(|| ArmoryError::UnknownItem(entry.item.clone()))?;
            pool.add_item(item, entry.count);
        }
        Ok(pool)
    }
}
