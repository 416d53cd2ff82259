//! Equipment slots and loadouts.

use serde::{Deserialize, Serialize};

use crate::item::{EquipmentElement, Item};

/// Equipment slot of a troop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipmentSlot {
    /// First weapon slot.
    Weapon0,
    /// Second weapon slot.
    Weapon1,
    /// Third weapon slot.
    Weapon2,
    /// Fourth weapon slot.
    Weapon3,
    /// Head armor.
    Head,
    /// Body armor.
    Body,
    /// Leg armor.
    Leg,
    /// Hand armor.
    Gloves,
    /// Cape.
    Cape,
    /// Mount.
    Horse,
    /// Mount harness.
    HorseHarness,
}

impl EquipmentSlot {
    /// Number of slots in a loadout.
    pub const COUNT: usize = 11;

    /// Every slot, weapons first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Weapon0,
        Self::Weapon1,
        Self::Weapon2,
        Self::Weapon3,
        Self::Head,
        Self::Body,
        Self::Leg,
        Self::Gloves,
        Self::Cape,
        Self::Horse,
        Self::HorseHarness,
    ];

    /// Weapon slots.
    pub const WEAPONS: [Self; 4] = [Self::Weapon0, Self::Weapon1, Self::Weapon2, Self::Weapon3];

    /// Worn armor slots.
    pub const ARMOR: [Self; 5] = [Self::Head, Self::Body, Self::Leg, Self::Gloves, Self::Cape];

    /// Mount slots.
    pub const MOUNT: [Self; 2] = [Self::Horse, Self::HorseHarness];

    const fn index(self) -> usize {
        self as usize
    }

    /// Check if this is a weapon slot.
    #[must_use]
    pub const fn is_weapon(self) -> bool {
        matches!(
            self,
            Self::Weapon0 | Self::Weapon1 | Self::Weapon2 | Self::Weapon3
        )
    }
}

/// One element per equipment slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loadout {
    slots: [EquipmentElement; EquipmentSlot::COUNT],
}

impl Loadout {
    /// Create an empty loadout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item in a slot.
    #[must_use]
    pub fn with(mut self, slot: EquipmentSlot, item: Item) -> Self {
        self.set(slot, EquipmentElement::new(item));
        self
    }

    /// Replace a slot's content.
    pub fn set(&mut self, slot: EquipmentSlot, element: EquipmentElement) {
        self.slots[slot.index()] = element;
    }

    /// Content of a slot.
    #[must_use]
    pub fn get(&self, slot: EquipmentSlot) -> &EquipmentElement {
        &self.slots[slot.index()]
    }

    /// A loadout is usable when at least one slot is occupied.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.slots.iter().any(|element| !element.is_empty())
    }

    /// Occupied slots and their items, in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).item().map(|item| (slot, item)))
    }
}
