//! Replenishment: turn liquidation proceeds into throwing weapons.
//!
//! The eligible item list is built from the catalog on first use and kept
//! for the converter's lifetime. Call [`ReplenishmentConverter::invalidate_cache`]
//! after the catalog changes.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::ItemCatalog;
use crate::item::Item;
use crate::pool::EquipmentPool;

/// Replenishment settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentConfig {
    /// Highest tier of throwing weapon the armory buys.
    #[serde(default = "default_max_tier")]
    pub max_tier: u8,
}

/// Default tier cap for purchased throwing weapons.
const fn default_max_tier() -> u8 {
    3
}

impl Default for ReplenishmentConfig {
    fn default() -> Self {
        Self {
            max_tier: default_max_tier(),
        }
    }
}

/// Outcome of spending a budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentReport {
    /// Budget that was available.
    pub budget: u64,
    /// Denars spent. Never exceeds `budget`.
    pub spent: u64,
    /// Units added to the pool.
    pub acquired: u32,
}

/// Spends denars on randomly drawn throwing weapons.
#[derive(Debug, Clone, Default)]
pub struct ReplenishmentConverter {
    config: ReplenishmentConfig,
    /// Eligible items sorted by value, built lazily.
    eligible: Option<Vec<Item>>,
}

impl ReplenishmentConverter {
    /// Create a converter with an empty cache.
    #[must_use]
    pub const fn new(config: ReplenishmentConfig) -> Self {
        Self {
            config,
            eligible: None,
        }
    }

    /// Settings in use.
    #[must_use]
    pub const fn config(&self) -> &ReplenishmentConfig {
        &self.config
    }

    /// Check if an item can be bought with proceeds.
    #[must_use]
    pub fn is_eligible(&self, item: &Item) -> bool {
        is_acquirable(item, self.config.max_tier)
    }

    /// Eligible items, building the cache from `catalog` on first call.
    pub fn eligible_items<C>(&mut self, catalog: &C) -> &[Item]
    where
        C: ItemCatalog + ?Sized,
    {
        let max_tier = self.config.max_tier;
        self.eligible.get_or_insert_with(|| {
            let mut items: Vec<Item> = catalog
                .items()
                .filter(|item| is_acquirable(item, max_tier))
                .cloned()
                .collect();
            items.sort_by(|a, b| a.value.cmp(&b.value).then_with(|| a.id.cmp(&b.id)));
            debug!("Cached {} acquirable throwing weapons", items.len());
            items
        })
    }

    /// Check if the eligible list has been built.
    #[must_use]
    pub const fn is_cached(&self) -> bool {
        self.eligible.is_some()
    }

    /// Drop the cached eligible list.
    pub fn invalidate_cache(&mut self) {
        self.eligible = None;
    }

    /// Spend `budget` on throwing weapons and add them to the pool.
    ///
    /// Each draw is uniform over the eligible items still affordable with
    /// the remaining budget. Stops once the budget is used up or nothing
    /// is affordable, so the spend never exceeds the budget. An empty
    /// eligible list buys nothing.
    pub fn spend<C>(
        &mut self,
        budget: u64,
        pool: &mut EquipmentPool,
        catalog: &C,
        rng: &mut impl Rng,
    ) -> ReplenishmentReport
    where
        C: ItemCatalog + ?Sized,
    {
        let mut report = ReplenishmentReport {
            budget,
            ..Default::default()
        };
        if budget == 0 {
            return report;
        }

        let eligible = self.eligible_items(catalog);
        if eligible.is_empty() {
            warn!("No acquirable throwing weapons in the catalog, keeping {budget} denars");
            return report;
        }

        let mut remaining = budget;
        while remaining > 0 {
            let affordable = eligible.partition_point(|item| u64::from(item.value) <= remaining);
            let Some(item) = eligible[..affordable].choose(rng) else {
                break;
            };
            pool.add_item(item, 1);
            remaining -= u64::from(item.value);
            report.acquired += 1;
        }

        report.spent = budget - remaining;
        debug!(
            "Bought {} throwing weapons for {} of {budget} denars",
            report.acquired, report.spent
        );
        report
    }
}

/// Low-tier throwing weapons with a price.
fn is_acquirable(item: &Item, max_tier: u8) -> bool {
    item.is_thrown_weapon() && item.value > 0 && item.tier <= max_tier
}
