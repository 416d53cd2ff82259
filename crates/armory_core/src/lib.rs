//! # Armory Core
//!
//! Shared equipment pool accounting for a party's armory.
//!
//! Equipment flows into the pool when troops are recruited or when battle
//! participants leave the field, and flows out when troops are equipped.
//! Periodically the pool is rebalanced: stock above per-category thresholds
//! is sold, cheapest and lowest tier first, and the proceeds are spent on
//! throwing weapons.
//!
//! This crate contains only the accounting:
//! - No IO (data is parsed from text handed in by the caller)
//! - No host object model (troops, rosters and catalogs are thin views)
//! - Seeded randomness only
//!
//! ## Crate Structure
//!
//! - [`pool`] - Counted multiset of equipment
//! - [`liquidation`] - Surplus liquidation against thresholds
//! - [`replenishment`] - Spending proceeds on throwing weapons
//! - [`resolver`] - Starting equipment of recruits
//! - [`intake`] / [`assignment`] - Pool inflows and outflows
//! - [`armory`] - The session service tying it together
//! - [`data`] - RON-loadable configuration and catalog data

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod armory;
pub mod assignment;
pub mod catalog;
pub mod data;
pub mod error;
pub mod intake;
pub mod item;
pub mod liquidation;
pub mod loadout;
pub mod party;
pub mod pool;
pub mod replenishment;
pub mod resolver;
pub mod thresholds;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::armory::{Armory, RebalanceReport};
    pub use crate::assignment::AssignmentReport;
    pub use crate::catalog::{CatalogRegistry, ItemCatalog};
    pub use crate::data::{ArmoryConfig, CatalogData, StockData};
    pub use crate::error::{ArmoryError, Result};
    pub use crate::item::{
        CultureId, EquipmentElement, Item, ItemCategory, ItemId, WeaponClass, WeaponProfile,
    };
    pub use crate::liquidation::{CategorySale, LiquidationReport};
    pub use crate::loadout::{EquipmentSlot, Loadout};
    pub use crate::party::{Combatant, HeadcountSource, PartyRoster, TroopId, TroopTemplate};
    pub use crate::pool::{EquipmentPool, PoolEntry};
    pub use crate::replenishment::{ReplenishmentConfig, ReplenishmentReport};
    pub use crate::thresholds::{ThresholdRule, ThresholdTable};
}
