//! Test fixtures and helpers.
//!
//! Pre-built items, catalogs and troops for consistent testing.

use armory_core::catalog::CatalogRegistry;
use armory_core::item::{Item, ItemCategory, WeaponClass, WeaponProfile};
use armory_core::loadout::{EquipmentSlot, Loadout};
use armory_core::party::TroopTemplate;
use armory_core::pool::EquipmentPool;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for tests.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Armor or mount item with no culture.
#[must_use]
pub fn item(id: &str, category: ItemCategory, tier: u8, value: u32) -> Item {
    Item::new(id, id, category, tier, value)
}

/// Helmet with no culture.
#[must_use]
pub fn helmet(id: &str, tier: u8, value: u32) -> Item {
    item(id, ItemCategory::HeadArmor, tier, value)
}

/// Stack of javelins.
#[must_use]
pub fn javelins(id: &str, tier: u8, value: u32) -> Item {
    item(id, ItemCategory::Thrown, tier, value)
        .with_weapon(WeaponProfile::new([WeaponClass::Javelin], true))
}

/// Non-consumable melee weapon with the given classes.
#[must_use]
pub fn melee(id: &str, classes: &[WeaponClass]) -> Item {
    item(id, ItemCategory::OneHandedWeapon, 2, 60)
        .with_weapon(WeaponProfile::new(classes.iter().copied(), false))
}

/// Catalog containing exactly `items`.
///
/// # Panics
///
/// Panics if an item is rejected by the catalog.
#[must_use]
pub fn catalog(items: impl IntoIterator<Item = Item>) -> CatalogRegistry {
    let mut catalog = CatalogRegistry::new();
    for item in items {
        catalog
            .register(item)
            .expect("fixture items must be valid catalog entries");
    }
    catalog
}

/// Pool holding `count` units of each item.
#[must_use]
pub fn pool_with(stock: &[(Item, u32)]) -> EquipmentPool {
    let mut pool = EquipmentPool::new();
    for (item, count) in stock {
        pool.add_item(item, *count);
    }
    pool
}

/// Ten tier-1 helmets worth 5 and five tier-3 helmets worth 20.
#[must_use]
pub fn helmet_stockpile() -> EquipmentPool {
    pool_with(&[
        (helmet("leather_cap", 1, 5), 10),
        (helmet("nasal_helmet", 3, 20), 5),
    ])
}

/// Tier-1 infantry recruit with a cap, a tunic and a sword or an axe.
#[must_use]
pub fn infantry_recruit() -> TroopTemplate {
    let base = Loadout::new()
        .with(EquipmentSlot::Head, helmet("leather_cap", 1, 5))
        .with(
            EquipmentSlot::Body,
            item("padded_tunic", ItemCategory::BodyArmor, 1, 12),
        );

    TroopTemplate::new("vlandian_recruit", "vlandia", 1)
        .with_loadout(
            base.clone()
                .with(EquipmentSlot::Weapon0, melee("arming_sword", &[WeaponClass::OneHandedSword])),
        )
        .with_loadout(
            base.with(EquipmentSlot::Weapon0, melee("hand_axe", &[WeaponClass::OneHandedAxe])),
        )
}
