//! Equipment items and equipment elements.
//!
//! Items are immutable catalog entries. The pool and loadouts only ever
//! refer to them through [`EquipmentElement`], whose identity is the item id.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Highest tier an item can have.
pub const MAX_TIER: u8 = 6;

/// Stable identifier of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a culture (item origin or troop culture).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CultureId(pub String);

impl CultureId {
    /// Create a new culture ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for CultureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CultureId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Item category. Thresholds are configured per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Helmets and hoods.
    HeadArmor,
    /// Body armor.
    BodyArmor,
    /// Boots and greaves.
    LegArmor,
    /// Gloves and gauntlets.
    HandArmor,
    /// Capes and shoulder pieces.
    Cape,
    /// Riding animals.
    Horse,
    /// Saddles and barding.
    HorseHarness,
    /// One-handed melee weapons.
    OneHandedWeapon,
    /// Two-handed melee weapons.
    TwoHandedWeapon,
    /// Spears, lances and glaives.
    Polearm,
    /// Bows.
    Bow,
    /// Crossbows.
    Crossbow,
    /// Arrow quivers.
    Arrows,
    /// Bolt cases.
    Bolts,
    /// Shields.
    Shield,
    /// Javelins, throwing axes and knives.
    Thrown,
}

impl ItemCategory {
    /// Every category, in threshold evaluation order.
    pub const ALL: [Self; 16] = [
        Self::HeadArmor,
        Self::BodyArmor,
        Self::LegArmor,
        Self::HandArmor,
        Self::Cape,
        Self::Horse,
        Self::HorseHarness,
        Self::OneHandedWeapon,
        Self::TwoHandedWeapon,
        Self::Polearm,
        Self::Bow,
        Self::Crossbow,
        Self::Arrows,
        Self::Bolts,
        Self::Shield,
        Self::Thrown,
    ];

    /// Worn armor pieces.
    #[must_use]
    pub const fn is_armor(self) -> bool {
        matches!(
            self,
            Self::HeadArmor | Self::BodyArmor | Self::LegArmor | Self::HandArmor | Self::Cape
        )
    }

    /// Mounts and mount harnesses.
    #[must_use]
    pub const fn is_mount(self) -> bool {
        matches!(self, Self::Horse | Self::HorseHarness)
    }

    /// Anything that goes in a weapon slot.
    #[must_use]
    pub const fn is_weapon(self) -> bool {
        !self.is_armor() && !self.is_mount()
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::HeadArmor => "head armor",
            Self::BodyArmor => "body armor",
            Self::LegArmor => "leg armor",
            Self::HandArmor => "hand armor",
            Self::Cape => "capes",
            Self::Horse => "horses",
            Self::HorseHarness => "horse harnesses",
            Self::OneHandedWeapon => "one-handed weapons",
            Self::TwoHandedWeapon => "two-handed weapons",
            Self::Polearm => "polearms",
            Self::Bow => "bows",
            Self::Crossbow => "crossbows",
            Self::Arrows => "arrows",
            Self::Bolts => "bolts",
            Self::Shield => "shields",
            Self::Thrown => "throwing weapons",
        }
    }
}

/// Weapon class tag. A weapon may carry several (e.g. a spear usable
/// one- or two-handed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponClass {
    /// Short blade.
    Dagger,
    /// One-handed sword.
    OneHandedSword,
    /// Two-handed sword.
    TwoHandedSword,
    /// One-handed axe.
    OneHandedAxe,
    /// Two-handed axe.
    TwoHandedAxe,
    /// One-handed mace.
    Mace,
    /// Two-handed mace.
    TwoHandedMace,
    /// War pick.
    Pick,
    /// One-handed spear or lance.
    OneHandedPolearm,
    /// Two-handed polearm.
    TwoHandedPolearm,
    /// Polearm held low (pikes, glaives).
    LowGripPolearm,
    /// Javelin.
    Javelin,
    /// Throwing axe.
    ThrowingAxe,
    /// Throwing knife.
    ThrowingKnife,
    /// Throwing stone.
    Stone,
    /// Arrow ammunition.
    Arrow,
    /// Bolt ammunition.
    Bolt,
    /// Bow.
    Bow,
    /// Crossbow.
    Crossbow,
    /// Small shield.
    SmallShield,
    /// Large shield.
    LargeShield,
}

impl WeaponClass {
    /// Classes that are thrown at the enemy.
    #[must_use]
    pub const fn is_thrown(self) -> bool {
        matches!(
            self,
            Self::Javelin | Self::ThrowingAxe | Self::ThrowingKnife | Self::Stone
        )
    }
}

/// Weapon component of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Weapon classes this item can be used as.
    pub classes: Vec<WeaponClass>,

    /// Consumable weapons (ammunition, throwing stacks) are never fungible.
    #[serde(default)]
    pub consumable: bool,
}

impl WeaponProfile {
    /// Create a weapon profile.
    #[must_use]
    pub fn new(classes: impl IntoIterator<Item = WeaponClass>, consumable: bool) -> Self {
        Self {
            classes: classes.into_iter().collect(),
            consumable,
        }
    }

    /// Class fingerprint used to decide whether two weapons are interchangeable.
    #[must_use]
    pub fn fingerprint(&self) -> WeaponFingerprint {
        WeaponFingerprint(self.classes.iter().copied().collect())
    }
}

/// Order-independent set of weapon classes.
///
/// Two non-consumable weapons with equal fingerprints are duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeaponFingerprint(BTreeSet<WeaponClass>);

impl WeaponFingerprint {
    /// Classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = WeaponClass> + '_ {
        self.0.iter().copied()
    }
}

/// Immutable catalog entry.
///
/// # Example RON
///
/// ```ron
/// (
///     id: "imperial_javelin",
///     name: "Imperial Javelin",
///     category: Thrown,
///     tier: 2,
///     value: 45,
///     culture: Some("empire"),
///     weapon: Some((classes: [Javelin], consumable: true)),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Category used for threshold accounting.
    pub category: ItemCategory,

    /// Ordered rank, 0 to [`MAX_TIER`].
    pub tier: u8,

    /// Monetary value in denars.
    pub value: u32,

    /// Culture the item originates from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<CultureId>,

    /// Weapon component, for anything that goes in a weapon slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<WeaponProfile>,
}

impl Item {
    /// Create an item with no culture and no weapon component.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: ItemCategory,
        tier: u8,
        value: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            tier,
            value,
            culture: None,
            weapon: None,
        }
    }

    /// Set the originating culture.
    #[must_use]
    pub fn with_culture(mut self, culture: impl Into<CultureId>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// Attach a weapon component.
    #[must_use]
    pub fn with_weapon(mut self, weapon: WeaponProfile) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Check if this item can be wielded.
    #[must_use]
    pub const fn has_weapon_component(&self) -> bool {
        self.weapon.is_some()
    }

    /// Check if this item is a consumable weapon.
    #[must_use]
    pub fn is_consumable(&self) -> bool {
        self.weapon.as_ref().is_some_and(|w| w.consumable)
    }

    /// Check if this item is a stack of throwing weapons.
    #[must_use]
    pub fn is_thrown_weapon(&self) -> bool {
        self.category == ItemCategory::Thrown
            && self
                .weapon
                .as_ref()
                .is_some_and(|w| w.consumable && w.classes.iter().any(|c| c.is_thrown()))
    }

    /// Weapon class fingerprint, if this is a weapon.
    #[must_use]
    pub fn weapon_fingerprint(&self) -> Option<WeaponFingerprint> {
        self.weapon.as_ref().map(WeaponProfile::fingerprint)
    }

    /// Liquidation order key: lowest tier first, then cheapest.
    #[must_use]
    pub const fn liquidation_key(&self) -> (u8, u32) {
        (self.tier, self.value)
    }
}

/// One equipment slot's content: a single item or nothing.
///
/// Equality and hashing use the item id only.
#[derive(Debug, Clone, Default)]
pub struct EquipmentElement {
    item: Option<Item>,
}

impl EquipmentElement {
    /// The empty slot.
    pub const EMPTY: Self = Self { item: None };

    /// Wrap an item.
    #[must_use]
    pub const fn new(item: Item) -> Self {
        Self { item: Some(item) }
    }

    /// Check if this element holds no item.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// The held item.
    #[must_use]
    pub const fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// Id of the held item.
    #[must_use]
    pub fn item_id(&self) -> Option<&ItemId> {
        self.item.as_ref().map(|item| &item.id)
    }
}

impl From<Item> for EquipmentElement {
    fn from(item: Item) -> Self {
        Self::new(item)
    }
}

impl PartialEq for EquipmentElement {
    fn eq(&self, other: &Self) -> bool {
        self.item_id() == other.item_id()
    }
}

impl Eq for EquipmentElement {}

impl Hash for EquipmentElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item_id().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn javelin() -> Item {
        Item::new("javelin", "Javelin", ItemCategory::Thrown, 2, 40)
            .with_weapon(WeaponProfile::new([WeaponClass::Javelin], true))
    }

    #[test]
    fn test_category_groups() {
        assert!(ItemCategory::HeadArmor.is_armor());
        assert!(ItemCategory::HorseHarness.is_mount());
        assert!(ItemCategory::Shield.is_weapon());
        assert!(!ItemCategory::Cape.is_weapon());

        let armor = ItemCategory::ALL.iter().filter(|c| c.is_armor()).count();
        assert_eq!(armor, 5);
    }

    #[test]
    fn test_thrown_weapon_detection() {
        assert!(javelin().is_thrown_weapon());
        assert!(javelin().is_consumable());

        let arrows = Item::new("arrows", "Arrows", ItemCategory::Arrows, 1, 10)
            .with_weapon(WeaponProfile::new([WeaponClass::Arrow], true));
        assert!(arrows.is_consumable());
        assert!(!arrows.is_thrown_weapon());

        let helmet = Item::new("helmet", "Helmet", ItemCategory::HeadArmor, 1, 10);
        assert!(!helmet.is_thrown_weapon());
        assert!(!helmet.has_weapon_component());
    }

    #[test]
    fn test_fingerprint_ignores_order_and_repeats() {
        let a = WeaponProfile::new(
            [WeaponClass::OneHandedPolearm, WeaponClass::TwoHandedPolearm],
            false,
        );
        let b = WeaponProfile::new(
            [
                WeaponClass::TwoHandedPolearm,
                WeaponClass::OneHandedPolearm,
                WeaponClass::TwoHandedPolearm,
            ],
            false,
        );
        let c = WeaponProfile::new([WeaponClass::TwoHandedPolearm], false);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_element_identity_is_item_id() {
        let a = EquipmentElement::new(javelin());
        let mut renamed = javelin();
        renamed.name = "Sharper Javelin".to_string();
        let b = EquipmentElement::new(renamed);

        assert_eq!(a, b);
        assert_ne!(a, EquipmentElement::EMPTY);
        assert!(EquipmentElement::EMPTY.is_empty());
        assert_eq!(a.item_id(), Some(&ItemId::new("javelin")));
    }

    #[test]
    fn test_liquidation_key_orders_tier_before_value() {
        let cheap_high = Item::new("a", "A", ItemCategory::HeadArmor, 3, 5);
        let pricey_low = Item::new("b", "B", ItemCategory::HeadArmor, 1, 500);
        assert!(pricey_low.liquidation_key() < cheap_high.liquidation_key());
    }
}
