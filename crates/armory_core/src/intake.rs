//! Intake paths: recruitment and battlefield salvage.
//!
//! Both reduce to adding one unit per occupied equipment element.

use rand::Rng;
use tracing::{debug, warn};

use crate::catalog::ItemCatalog;
use crate::party::{Combatant, TroopTemplate};
use crate::pool::EquipmentPool;
use crate::resolver::StartingEquipmentResolver;

/// Add the starting equipment of each recruited troop to the pool.
///
/// `troops` yields one template per recruited soldier. Returns the number
/// of units added.
pub fn recruit<'a, C>(
    pool: &mut EquipmentPool,
    resolver: &StartingEquipmentResolver,
    troops: impl IntoIterator<Item = &'a TroopTemplate>,
    catalog: &C,
    rng: &mut impl Rng,
) -> u64
where
    C: ItemCatalog + ?Sized,
{
    let mut added = 0u64;
    for troop in troops {
        if troop.battle_loadouts.is_empty() {
            warn!("Recruited troop {} has no battle equipment", troop.id);
            continue;
        }
        debug!("Recruiting {}", troop.id);

        let elements = resolver.resolve(troop, catalog, rng);
        for element in elements.iter().filter(|e| !e.is_empty()) {
            pool.add_one(element);
            added += 1;
        }
        debug!("{} starting equipments added for {}", elements.len(), troop.id);
    }
    added
}

/// Return the equipment of departing battle participants to the pool.
///
/// Participants without a valid character are skipped. Returns the number
/// of units reclaimed.
pub fn salvage<'a>(
    pool: &mut EquipmentPool,
    combatants: impl IntoIterator<Item = &'a Combatant>,
) -> u64 {
    let mut reclaimed = 0u64;
    for combatant in combatants {
        let Some(troop) = &combatant.troop else {
            debug!("Skipping salvage from combatant without a character");
            continue;
        };
        debug!("Returning equipment of {troop}");
        for (slot, item) in combatant.equipment.occupied() {
            pool.add_item(item, 1);
            debug!("Equipment {} returned from {slot:?}", item.id);
            reclaimed += 1;
        }
    }
    debug!("{reclaimed} equipment reclaimed");
    reclaimed
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::catalog::CatalogRegistry;
    use crate::item::{Item, ItemCategory};
    use crate::loadout::{EquipmentSlot, Loadout};

    fn kit() -> Loadout {
        Loadout::new()
            .with(
                EquipmentSlot::Head,
                Item::new("cap", "Cap", ItemCategory::HeadArmor, 1, 5),
            )
            .with(
                EquipmentSlot::Body,
                Item::new("tunic", "Tunic", ItemCategory::BodyArmor, 1, 12),
            )
    }

    #[test]
    fn test_recruit_adds_starting_equipment_per_soldier() {
        let troop = TroopTemplate::new("recruit", "vlandia", 1).with_loadout(kit());
        let mut pool = EquipmentPool::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let added = recruit(
            &mut pool,
            &StartingEquipmentResolver::new(false),
            [&troop, &troop, &troop],
            &CatalogRegistry::new(),
            &mut rng,
        );

        assert_eq!(added, 6);
        assert_eq!(pool.count_of(&"cap".into()), 3);
        assert_eq!(pool.count_of(&"tunic".into()), 3);
    }

    #[test]
    fn test_recruit_skips_troops_without_equipment() {
        let troop = TroopTemplate::new("peasant", "vlandia", 0);
        let mut pool = EquipmentPool::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let added = recruit(
            &mut pool,
            &StartingEquipmentResolver::default(),
            [&troop],
            &CatalogRegistry::new(),
            &mut rng,
        );

        assert_eq!(added, 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_salvage_skips_invalid_combatants() {
        let survivor = Combatant::new("recruit", kit());
        let phantom = Combatant {
            troop: None,
            equipment: kit(),
        };
        let mut pool = EquipmentPool::new();

        let reclaimed = salvage(&mut pool, [&survivor, &phantom, &survivor]);

        assert_eq!(reclaimed, 4);
        assert_eq!(pool.count_of(&"cap".into()), 2);
        assert_eq!(pool.total_units(), 4);
    }
}
