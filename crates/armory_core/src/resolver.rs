//! Starting equipment for recruited troops.
//!
//! Armor and mounts come from one drawn battle loadout. Weapons are gathered
//! from every loadout variant: consumables are always kept, other weapons
//! are reduced to one per weapon-class fingerprint.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::ItemCatalog;
use crate::item::{EquipmentElement, Item};
use crate::loadout::EquipmentSlot;
use crate::party::TroopTemplate;

/// Builds the set of equipment a recruit brings into the armory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartingEquipmentResolver {
    randomize_armor: bool,
}

impl StartingEquipmentResolver {
    /// Create a resolver. With `randomize_armor`, armor pieces may be swapped
    /// for catalog items of the same category and tier.
    #[must_use]
    pub const fn new(randomize_armor: bool) -> Self {
        Self { randomize_armor }
    }

    /// Check if armor randomization is enabled.
    #[must_use]
    pub const fn randomizes_armor(&self) -> bool {
        self.randomize_armor
    }

    /// Resolve the starting equipment of one recruit.
    ///
    /// Order is armor, mounts, consumable weapons, then the deduplicated
    /// non-consumable weapons. Troops without valid loadouts resolve to
    /// nothing.
    pub fn resolve<C>(
        &self,
        troop: &TroopTemplate,
        catalog: &C,
        rng: &mut impl Rng,
    ) -> Vec<EquipmentElement>
    where
        C: ItemCatalog + ?Sized,
    {
        let Some(loadout) = troop.random_battle_loadout(rng) else {
            debug!("Troop {} has no battle loadouts", troop.id);
            return Vec::new();
        };

        let mut elements = Vec::new();

        for slot in EquipmentSlot::ARMOR {
            let Some(original) = loadout.get(slot).item() else {
                continue;
            };
            let item = if self.randomize_armor {
                randomized_armor(original, troop, catalog, rng)
            } else {
                original.clone()
            };
            elements.push(EquipmentElement::new(item));
        }

        for slot in EquipmentSlot::MOUNT {
            let element = loadout.get(slot);
            if !element.is_empty() {
                elements.push(element.clone());
            }
        }

        let mut weapons = Vec::new();
        for variant in troop.valid_loadouts() {
            for slot in EquipmentSlot::WEAPONS {
                let Some(item) = variant.get(slot).item() else {
                    continue;
                };
                if !item.has_weapon_component() {
                    continue;
                }
                if item.is_consumable() {
                    elements.push(EquipmentElement::new(item.clone()));
                } else {
                    weapons.push(item);
                }
            }
        }

        elements.extend(distinct_weapons(weapons, rng));
        elements
    }
}

/// Shuffle non-consumable weapons and keep one per weapon-class fingerprint.
fn distinct_weapons(mut weapons: Vec<&Item>, rng: &mut impl Rng) -> Vec<EquipmentElement> {
    weapons.shuffle(rng);
    let mut seen = HashSet::new();
    weapons
        .into_iter()
        .filter(|item| item.weapon_fingerprint().is_some_and(|f| seen.insert(f)))
        .map(|item| EquipmentElement::new(item.clone()))
        .collect()
}

/// Swap an armor piece for a random candidate.
///
/// Candidates are catalog items matching the original's category, tier and
/// culture; items matching the troop's own tier and culture; and the
/// original itself. Each candidate is equally likely, so larger lists
/// weigh more.
fn randomized_armor<C>(
    original: &Item,
    troop: &TroopTemplate,
    catalog: &C,
    rng: &mut impl Rng,
) -> Item
where
    C: ItemCatalog + ?Sized,
{
    let same_origin = original.culture.as_ref().map_or_else(Vec::new, |culture| {
        catalog.items_by_category_tier_culture(original.category, original.tier, culture)
    });
    let same_troop =
        catalog.items_by_category_tier_culture(original.category, troop.tier, &troop.culture);
    let keep = [original];

    pick_across(&[same_origin.as_slice(), same_troop.as_slice(), &keep[..]], rng)
        .map_or_else(|| original.clone(), |item| (*item).clone())
}

/// Draw one element uniformly across several lists without concatenating them.
fn pick_across<'a, T>(lists: &[&'a [T]], rng: &mut impl Rng) -> Option<&'a T> {
    let total: usize = lists.iter().map(|list| list.len()).sum();
    if total == 0 {
        return None;
    }
    let mut index = rng.gen_range(0..total);
    for list in lists {
        if index < list.len() {
            return list.get(index);
        }
        index -= list.len();
    }
    None
}
