//! Armory settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::item::ItemCategory;
use crate::replenishment::ReplenishmentConfig;
use crate::thresholds::{ThresholdRule, ThresholdTable};

/// Threshold rule for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdEntry {
    /// Category the rule applies to.
    pub category: ItemCategory,
    /// How many units to keep.
    pub rule: ThresholdRule,
}

/// Settings for one armory session.
///
/// # Example RON
///
/// ```ron
/// ArmoryConfig(
///     randomize_starting_equipment: true,
///     thresholds: [
///         (category: HeadArmor, rule: PerHeadcount(per_member: 2)),
///         (category: Horse, rule: Fixed(20)),
///     ],
///     replenishment: (max_tier: 3),
///     seed: Some(42),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmoryConfig {
    /// Swap recruits' armor for random same-tier catalog pieces.
    #[serde(default)]
    pub randomize_starting_equipment: bool,

    /// Stock thresholds. Categories without an entry are never liquidated.
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<ThresholdEntry>,

    /// Replenishment settings.
    #[serde(default)]
    pub replenishment: ReplenishmentConfig,

    /// RNG seed. A fresh seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Two spares per troop for each armor category, one for mounts.
fn default_thresholds() -> Vec<ThresholdEntry> {
    ItemCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let per_member = if category.is_armor() {
                2
            } else if category.is_mount() {
                1
            } else {
                return None;
            };
            Some(ThresholdEntry {
                category,
                rule: ThresholdRule::PerHeadcount {
                    per_member,
                    minimum: 0,
                },
            })
        })
        .collect()
}

impl Default for ArmoryConfig {
    fn default() -> Self {
        Self {
            randomize_starting_equipment: false,
            thresholds: default_thresholds(),
            replenishment: ReplenishmentConfig::default(),
            seed: None,
        }
    }
}

impl ArmoryConfig {
    /// Parse settings from RON text.
    pub fn from_ron_str(content: &str, source_name: &str) -> Result<Self> {
        super::parse_ron(content, source_name)
    }

    /// Build the threshold table.
    ///
    /// # Errors
    ///
    /// Returns an error if a category appears twice or a rule is invalid.
    pub fn threshold_table(&self) -> Result<ThresholdTable> {
        ThresholdTable::from_entries(self.thresholds.iter().map(|e| (e.category, e.rule)))
    }

    /// Check the settings without building anything.
    pub fn validate(&self) -> Result<()> {
        self.threshold_table().map(|_| ())
    }
}
