//! Surplus liquidation.
//!
//! Each configured category is compared against its threshold for the
//! current headcount. Any surplus is sold off greedily, lowest tier first
//! and cheapest first within a tier, so better stock stays available for
//! future assignment. The pass is exact: when stock allows, exactly the
//! surplus is removed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::item::{ItemCategory, ItemId};
use crate::party::HeadcountSource;
use crate::pool::EquipmentPool;
use crate::thresholds::ThresholdTable;

/// What one category sold during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySale {
    /// Category that was over its threshold.
    pub category: ItemCategory,
    /// Units removed from the pool.
    pub units_sold: u64,
    /// Denars earned from those units.
    pub proceeds: u64,
}

/// Outcome of a liquidation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationReport {
    /// Headcount the thresholds were evaluated at. `None` if unavailable.
    pub headcount: Option<u32>,
    /// Denars earned across all categories.
    pub proceeds: u64,
    /// Per-category sales, only for categories that sold something.
    pub sales: Vec<CategorySale>,
}

impl LiquidationReport {
    /// Units sold across all categories.
    #[must_use]
    pub fn units_sold(&self) -> u64 {
        self.sales.iter().map(|s| s.units_sold).sum()
    }

    /// Sale record for one category.
    #[must_use]
    pub fn sale_for(&self, category: ItemCategory) -> Option<&CategorySale> {
        self.sales.iter().find(|s| s.category == category)
    }
}

/// Heap entry. Ordered by (tier, value), then id for a stable order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    key: (u8, u32),
    id: ItemId,
}

/// Sell surplus stock in every category of the table.
///
/// Returns zero proceeds without touching the pool when the headcount is
/// unavailable.
pub fn liquidate_surplus(
    pool: &mut EquipmentPool,
    thresholds: &ThresholdTable,
    headcount: &impl HeadcountSource,
) -> LiquidationReport {
    let Some(headcount) = headcount.non_hero_headcount() else {
        warn!("Party roster unavailable, skipping liquidation");
        return LiquidationReport::default();
    };

    let mut report = LiquidationReport {
        headcount: Some(headcount),
        ..Default::default()
    };

    for (category, rule) in thresholds.iter() {
        if let Some(sale) = liquidate_category(pool, category, rule.threshold(headcount)) {
            report.proceeds += sale.proceeds;
            report.sales.push(sale);
        }
    }

    info!(
        "Sold {} denars worth of equipment ({} units) at headcount {headcount}",
        report.proceeds,
        report.units_sold()
    );
    report
}

/// Sell one category down to `threshold` units.
///
/// Returns `None` when the category is at or under its threshold.
pub fn liquidate_category(
    pool: &mut EquipmentPool,
    category: ItemCategory,
    threshold: u64,
) -> Option<CategorySale> {
    let current = pool.category_count(category);
    if current <= threshold {
        return None;
    }
    let surplus = current - threshold;

    let mut queue: BinaryHeap<Reverse<Candidate>> = pool
        .query(|entry| entry.item().category == category)
        .map(|entry| {
            Reverse(Candidate {
                key: entry.item().liquidation_key(),
                id: entry.item().id.clone(),
            })
        })
        .collect();

    let mut remaining = surplus;
    let mut proceeds = 0u64;
    while remaining > 0 {
        let Some(Reverse(lowest)) = queue.pop() else {
            break;
        };
        let request = u32::try_from(remaining).unwrap_or(u32::MAX);
        let removed = pool.remove_by_id(&lowest.id, request);
        proceeds += u64::from(removed) * u64::from(lowest.key.1);
        remaining -= u64::from(removed);
        debug!("Sold {removed}x {} from {category:?}", lowest.id);
    }

    let units_sold = surplus - remaining;
    debug!("Sold {units_sold}x {category:?} items from the armory");
    Some(CategorySale {
        category,
        units_sold,
        proceeds,
    })
}
