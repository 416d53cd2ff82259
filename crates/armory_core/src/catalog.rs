//! Item catalog lookup.
//!
//! The catalog is owned by the host. The armory only asks it for items by
//! (category, tier, culture) and enumerates it once to find replenishment
//! candidates. [`CatalogRegistry`] is an in-memory implementation loaded
//! from RON data.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::data::CatalogData;
use crate::error::{ArmoryError, Result};
use crate::item::{CultureId, Item, ItemCategory, ItemId, MAX_TIER};

/// Read access to the equipment catalog.
pub trait ItemCatalog {
    /// Items of a category at an exact tier from one culture. May be empty.
    fn items_by_category_tier_culture(
        &self,
        category: ItemCategory,
        tier: u8,
        culture: &CultureId,
    ) -> Vec<&Item>;

    /// Every catalog item.
    fn items(&self) -> Box<dyn Iterator<Item = &Item> + '_>;

    /// Look up a single item.
    fn get(&self, id: &ItemId) -> Option<&Item>;
}

type LookupKey = (ItemCategory, u8, CultureId);

/// In-memory catalog indexed by (category, tier, culture).
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    items: BTreeMap<ItemId, Item>,
    by_lookup: HashMap<LookupKey, Vec<ItemId>>,
}

impl CatalogRegistry {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from loaded data, validating every item.
    pub fn from_data(data: CatalogData) -> Result<Self> {
        let mut registry = Self::new();
        for item in data.items {
            registry.register(item)?;
        }
        debug!("Catalog built with {} items", registry.len());
        Ok(registry)
    }

    /// Parse and build a catalog from RON text.
    pub fn from_ron_str(content: &str, source_name: &str) -> Result<Self> {
        Self::from_data(CatalogData::from_ron_str(content, source_name)?)
    }

    /// Register an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or the item breaks a data rule.
    pub fn register(&mut self, item: Item) -> Result<()> {
        validate_item(&item)?;
        if self.items.contains_key(&item.id) {
            return Err(ArmoryError::DuplicateItem(item.id));
        }
        if let Some(culture) = &item.culture {
            self.by_lookup
                .entry((item.category, item.tier, culture.clone()))
                .or_default()
                .push(item.id.clone());
        }
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for CatalogRegistry {
    fn items_by_category_tier_culture(
        &self,
        category: ItemCategory,
        tier: u8,
        culture: &CultureId,
    ) -> Vec<&Item> {
        self.by_lookup
            .get(&(category, tier, culture.clone()))
            .map(|ids| ids.iter().filter_map(|id| self.items.get(id)).collect())
            .unwrap_or_default()
    }

    fn items(&self) -> Box<dyn Iterator<Item = &Item> + '_> {
        Box::new(self.items.values())
    }

    fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }
}

/// Check catalog data rules for one item.
fn validate_item(item: &Item) -> Result<()> {
    let invalid = |reason: &str| {
        Err(ArmoryError::InvalidItem {
            id: item.id.clone(),
            reason: reason.to_string(),
        })
    };

    if item.id.as_str().is_empty() {
        return invalid("empty id");
    }
    if item.tier > MAX_TIER {
        return invalid("tier above maximum");
    }
    match &item.weapon {
        Some(_) if !item.category.is_weapon() => invalid("armor or mount with a weapon component"),
        Some(weapon) if weapon.classes.is_empty() => invalid("weapon component without classes"),
        None if item.category.is_weapon() => invalid("weapon without a weapon component"),
        _ => Ok(()),
    }
}
