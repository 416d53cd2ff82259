//! Troops, party rosters and battle participants.
//!
//! These are thin views of host-owned state: just enough for intake,
//! assignment and headcount queries.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::item::CultureId;
use crate::loadout::Loadout;

/// Identifier of a troop type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TroopId(pub String);

impl TroopId {
    /// Create a new troop ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TroopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TroopId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A recruitable troop type and its battle loadout variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TroopTemplate {
    /// Troop type identifier.
    pub id: TroopId,
    /// Culture the troop is recruited from.
    pub culture: CultureId,
    /// Troop tier.
    pub tier: u8,
    /// Heroes are not counted towards headcount.
    pub is_hero: bool,
    /// Loadout variants the troop can spawn with.
    pub battle_loadouts: Vec<Loadout>,
}

impl TroopTemplate {
    /// Create a regular troop with no loadouts.
    #[must_use]
    pub fn new(id: impl Into<TroopId>, culture: impl Into<CultureId>, tier: u8) -> Self {
        Self {
            id: id.into(),
            culture: culture.into(),
            tier,
            is_hero: false,
            battle_loadouts: Vec::new(),
        }
    }

    /// Add a battle loadout variant.
    #[must_use]
    pub fn with_loadout(mut self, loadout: Loadout) -> Self {
        self.battle_loadouts.push(loadout);
        self
    }

    /// Loadout variants that hold at least one item.
    pub fn valid_loadouts(&self) -> impl Iterator<Item = &Loadout> {
        self.battle_loadouts.iter().filter(|l| l.is_valid())
    }

    /// Draw one valid loadout variant.
    pub fn random_battle_loadout(&self, rng: &mut impl Rng) -> Option<&Loadout> {
        let valid: Vec<&Loadout> = self.valid_loadouts().collect();
        valid.choose(rng).copied()
    }
}

/// Supplies the headcount thresholds are evaluated against.
///
/// Returning `None` means the roster is unavailable and liquidation
/// should do nothing this pass.
pub trait HeadcountSource {
    /// Number of non-hero troops in the managing party.
    fn non_hero_headcount(&self) -> Option<u32>;
}

impl HeadcountSource for u32 {
    fn non_hero_headcount(&self) -> Option<u32> {
        Some(*self)
    }
}

impl<T: HeadcountSource> HeadcountSource for Option<T> {
    fn non_hero_headcount(&self) -> Option<u32> {
        self.as_ref().and_then(HeadcountSource::non_hero_headcount)
    }
}

/// One line of a party roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Troop type.
    pub troop: TroopId,
    /// Heroes are excluded from headcount.
    #[serde(default)]
    pub is_hero: bool,
    /// Number of troops of this type.
    pub count: u32,
}

/// Member roster of the party that owns the armory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRoster {
    /// Roster lines.
    pub entries: Vec<RosterEntry>,
}

impl PartyRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add troops to the roster.
    #[must_use]
    pub fn with_troops(mut self, troop: impl Into<TroopId>, count: u32) -> Self {
        self.entries.push(RosterEntry {
            troop: troop.into(),
            is_hero: false,
            count,
        });
        self
    }

    /// Add a hero to the roster.
    #[must_use]
    pub fn with_hero(mut self, hero: impl Into<TroopId>) -> Self {
        self.entries.push(RosterEntry {
            troop: hero.into(),
            is_hero: true,
            count: 1,
        });
        self
    }
}

impl HeadcountSource for PartyRoster {
    fn non_hero_headcount(&self) -> Option<u32> {
        Some(
            self.entries
                .iter()
                .filter(|entry| !entry.is_hero)
                .fold(0u32, |total, entry| total.saturating_add(entry.count)),
        )
    }
}

/// A battle participant leaving the field, with what it was wearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    /// Troop type of the participant. `None` for agents with no valid character.
    pub troop: Option<TroopId>,
    /// Equipment the participant carries.
    pub equipment: Loadout,
}

impl Combatant {
    /// Create a participant for a troop type.
    #[must_use]
    pub fn new(troop: impl Into<TroopId>, equipment: Loadout) -> Self {
        Self {
            troop: Some(troop.into()),
            equipment,
        }
    }

    /// Only participants with a character contribute salvage.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.troop.is_some()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::item::{Item, ItemCategory};
    use crate::loadout::EquipmentSlot;

    #[test]
    fn test_roster_headcount_excludes_heroes() {
        let roster = PartyRoster::new()
            .with_hero("player")
            .with_troops("recruit", 7)
            .with_troops("archer", 3)
            .with_hero("companion");

        assert_eq!(roster.non_hero_headcount(), Some(10));
    }

    #[test]
    fn test_missing_roster_has_no_headcount() {
        let missing: Option<PartyRoster> = None;
        assert_eq!(missing.non_hero_headcount(), None);
        assert_eq!(Some(4u32).non_hero_headcount(), Some(4));
    }

    #[test]
    fn test_random_loadout_skips_empty_variants() {
        let cap = Item::new("cap", "Cap", ItemCategory::HeadArmor, 1, 5);
        let troop = TroopTemplate::new("recruit", "vlandia", 1)
            .with_loadout(Loadout::new())
            .with_loadout(Loadout::new().with(EquipmentSlot::Head, cap));

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let loadout = troop.random_battle_loadout(&mut rng);
            assert!(loadout.is_some_and(Loadout::is_valid));
        }

        let empty = TroopTemplate::new("ghost", "vlandia", 1);
        assert!(empty.random_battle_loadout(&mut rng).is_none());
    }
}
