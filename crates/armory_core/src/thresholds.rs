//! Per-category stock thresholds.
//!
//! A threshold is a function of the party's non-hero headcount and gives
//! the number of units of a category the armory keeps before liquidating.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ArmoryError, Result};
use crate::item::ItemCategory;

/// How many units of a category to keep for a given headcount.
///
/// # Example RON
///
/// ```ron
/// PerHeadcount(per_member: 2, minimum: 10)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdRule {
    /// Keep a fixed number of units regardless of party size.
    Fixed(u32),

    /// Keep `per_member` units per troop, never fewer than `minimum`.
    PerHeadcount {
        /// Units kept per troop.
        per_member: u32,
        /// Floor applied to small parties.
        #[serde(default)]
        minimum: u32,
    },

    /// Keep `headcount * numerator / denominator` units, never fewer than `minimum`.
    Scaled {
        /// Ratio numerator.
        numerator: u32,
        /// Ratio denominator. Must be non-zero.
        denominator: u32,
        /// Floor applied to small parties.
        #[serde(default)]
        minimum: u32,
    },
}

impl ThresholdRule {
    /// Units to keep for `headcount` troops.
    #[must_use]
    pub fn threshold(&self, headcount: u32) -> u64 {
        let headcount = u64::from(headcount);
        match *self {
            Self::Fixed(n) => u64::from(n),
            Self::PerHeadcount {
                per_member,
                minimum,
            } => (headcount * u64::from(per_member)).max(u64::from(minimum)),
            Self::Scaled {
                numerator,
                denominator,
                minimum,
            } => {
                let scaled = if denominator == 0 {
                    0
                } else {
                    headcount * u64::from(numerator) / u64::from(denominator)
                };
                scaled.max(u64::from(minimum))
            }
        }
    }

    /// Check that the rule can be evaluated.
    pub fn validate(&self, category: ItemCategory) -> Result<()> {
        match self {
            Self::Scaled { denominator: 0, .. } => Err(ArmoryError::InvalidThreshold {
                category,
                reason: "denominator must be non-zero".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Category to threshold mapping. Read-only once the armory is built.
///
/// Iteration follows [`ItemCategory`] declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThresholdTable {
    rules: BTreeMap<ItemCategory, ThresholdRule>,
}

impl ThresholdTable {
    /// Create an empty table. No category is ever liquidated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing any existing one for the category.
    #[must_use]
    pub fn with_rule(mut self, category: ItemCategory, rule: ThresholdRule) -> Self {
        self.rules.insert(category, rule);
        self
    }

    /// Build a table from entries, rejecting duplicates and invalid rules.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (ItemCategory, ThresholdRule)>,
    ) -> Result<Self> {
        let mut rules = BTreeMap::new();
        for (category, rule) in entries {
            rule.validate(category)?;
            if rules.insert(category, rule).is_some() {
                return Err(ArmoryError::InvalidThreshold {
                    category,
                    reason: "configured more than once".to_string(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Rule for a category.
    #[must_use]
    pub fn get(&self, category: ItemCategory) -> Option<&ThresholdRule> {
        self.rules.get(&category)
    }

    /// Threshold for a category at the given headcount.
    #[must_use]
    pub fn threshold(&self, category: ItemCategory, headcount: u32) -> Option<u64> {
        self.rules.get(&category).map(|rule| rule.threshold(headcount))
    }

    /// Iterate configured categories and their rules.
    pub fn iter(&self) -> impl Iterator<Item = (ItemCategory, ThresholdRule)> + '_ {
        self.rules.iter().map(|(category, rule)| (*category, *rule))
    }

    /// Number of configured categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no category is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
