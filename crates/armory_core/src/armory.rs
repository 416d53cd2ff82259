//! The armory service.
//!
//! One [`Armory`] lives for a host session. It owns the pool and every
//! policy object, and exposes the four calls a host adapter translates its
//! events into: recruit, salvage, assign and rebalance.
//!
//! The armory is single-threaded. A host that shares it between threads
//! must wrap the whole value in one lock, since every call is a
//! read-modify-write on shared counts.

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::assignment::{assign_equipment, AssignmentReport};
use crate::catalog::ItemCatalog;
use crate::data::ArmoryConfig;
use crate::error::Result;
use crate::intake;
use crate::liquidation::{liquidate_surplus, LiquidationReport};
use crate::loadout::Loadout;
use crate::party::{Combatant, HeadcountSource, TroopTemplate};
use crate::pool::EquipmentPool;
use crate::replenishment::{ReplenishmentConverter, ReplenishmentReport};
use crate::resolver::StartingEquipmentResolver;
use crate::thresholds::ThresholdTable;

/// Outcome of one liquidation and replenishment cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebalanceReport {
    /// What was sold.
    pub liquidation: LiquidationReport,
    /// What was bought with the proceeds.
    pub replenishment: ReplenishmentReport,
}

impl RebalanceReport {
    /// Denars earned by selling surplus.
    #[must_use]
    pub const fn proceeds(&self) -> u64 {
        self.liquidation.proceeds
    }

    /// Denars spent on throwing weapons.
    #[must_use]
    pub const fn spent(&self) -> u64 {
        self.replenishment.spent
    }

    /// Throwing weapons bought.
    #[must_use]
    pub const fn acquired(&self) -> u32 {
        self.replenishment.acquired
    }
}

impl fmt::Display for RebalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sold excess equipment for {} denars and bought {} throwing weapons",
            self.spent(),
            self.acquired()
        )
    }
}

/// Shared equipment armory for one session.
#[derive(Debug, Clone)]
pub struct Armory {
    pool: EquipmentPool,
    thresholds: ThresholdTable,
    resolver: StartingEquipmentResolver,
    converter: ReplenishmentConverter,
    rng: ChaCha8Rng,
}

impl Armory {
    /// Build an empty armory from settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold configuration is invalid.
    pub fn new(config: &ArmoryConfig) -> Result<Self> {
        let rng = config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Ok(Self::from_parts(
            EquipmentPool::new(),
            config.threshold_table()?,
            StartingEquipmentResolver::new(config.randomize_starting_equipment),
            ReplenishmentConverter::new(config.replenishment),
            rng,
        ))
    }

    /// Assemble an armory from already-built parts.
    #[must_use]
    pub fn from_parts(
        pool: EquipmentPool,
        thresholds: ThresholdTable,
        resolver: StartingEquipmentResolver,
        converter: ReplenishmentConverter,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            pool,
            thresholds,
            resolver,
            converter,
            rng,
        }
    }

    /// The equipment pool.
    #[must_use]
    pub const fn pool(&self) -> &EquipmentPool {
        &self.pool
    }

    /// Mutable access to the pool, for host-driven corrections.
    pub fn pool_mut(&mut self) -> &mut EquipmentPool {
        &mut self.pool
    }

    /// The threshold table.
    #[must_use]
    pub const fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// The replenishment converter.
    #[must_use]
    pub const fn converter(&self) -> &ReplenishmentConverter {
        &self.converter
    }

    /// Forget the cached replenishment candidates after a catalog change.
    pub fn refresh_catalog(&mut self) {
        self.converter.invalidate_cache();
    }

    /// Stock the starting equipment of recruited troops.
    pub fn recruit<'a, C>(
        &mut self,
        troops: impl IntoIterator<Item = &'a TroopTemplate>,
        catalog: &C,
    ) -> u64
    where
        C: ItemCatalog + ?Sized,
    {
        intake::recruit(
            &mut self.pool,
            &self.resolver,
            troops,
            catalog,
            &mut self.rng,
        )
    }

    /// Reclaim the equipment of participants leaving a battle.
    pub fn salvage<'a>(&mut self, combatants: impl IntoIterator<Item = &'a Combatant>) -> u64 {
        intake::salvage(&mut self.pool, combatants)
    }

    /// Withdraw a troop's loadout from the pool.
    pub fn assign(&mut self, loadout: &Loadout) -> AssignmentReport {
        assign_equipment(&mut self.pool, loadout)
    }

    /// Sell surplus stock without replenishing.
    pub fn liquidate(&mut self, headcount: &impl HeadcountSource) -> LiquidationReport {
        liquidate_surplus(&mut self.pool, &self.thresholds, headcount)
    }

    /// Sell surplus stock and spend the proceeds on throwing weapons.
    pub fn rebalance<C>(&mut self, headcount: &impl HeadcountSource, catalog: &C) -> RebalanceReport
    where
        C: ItemCatalog + ?Sized,
    {
        let liquidation = liquidate_surplus(&mut self.pool, &self.thresholds, headcount);
        let replenishment =
            self.converter
                .spend(liquidation.proceeds, &mut self.pool, catalog, &mut self.rng);

        let report = RebalanceReport {
            liquidation,
            replenishment,
        };
        info!("{report}");
        report
    }
}
