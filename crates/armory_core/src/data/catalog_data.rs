//! Catalog data definition.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::item::Item;

/// Item catalog as stored on disk.
///
/// # Example RON
///
/// ```ron
/// CatalogData(
///     items: [
///         (id: "padded_coif", name: "Padded Coif", category: HeadArmor, tier: 1, value: 20),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// Every catalog item.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl CatalogData {
    /// Parse catalog data from RON text.
    pub fn from_ron_str(content: &str, source_name: &str) -> Result<Self> {
        super::parse_ron(content, source_name)
    }
}
