//! Offline rebalance runs.
//!
//! Loads a data directory, seeds a pool from the stock snapshot and runs
//! one liquidation and replenishment cycle.

use std::path::Path;

use armory_core::armory::{Armory, RebalanceReport};
use armory_core::data::StockData;
use armory_core::pool::EquipmentPool;
use tracing::info;

use crate::loader::{self, Result};

/// Options for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebalanceOptions {
    /// Party headcount. `None` means no party, which sells nothing.
    pub headcount: Option<u32>,
    /// Overrides the seed from `armory.ron`.
    pub seed: Option<u64>,
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct RebalanceRun {
    /// What was sold and bought.
    pub report: RebalanceReport,
    /// Pool content after the run.
    pub pool: EquipmentPool,
}

impl RebalanceRun {
    /// Snapshot the remaining stock.
    #[must_use]
    pub fn stock(&self) -> StockData {
        StockData::from_pool(&self.pool)
    }
}

/// Run one rebalance over the data in `dir`.
///
/// # Errors
///
/// Returns an error if the data directory fails to load.
pub fn run_rebalance(dir: &Path, options: RebalanceOptions) -> Result<RebalanceRun> {
    let catalog = loader::load_catalog(dir)?;
    let mut config = loader::load_config(dir)?;
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    let stock = loader::load_stock(dir)?;

    let mut armory = Armory::new(&config)?;
    *armory.pool_mut() = stock.to_pool(&catalog)?;
    info!(
        "Rebalancing {} units for headcount {:?}",
        armory.pool().total_units(),
        options.headcount
    );

    let report = armory.rebalance(&options.headcount, &catalog);
    Ok(RebalanceRun {
        report,
        pool: armory.pool().clone(),
    })
}

/// Render the pool as one line per item.
#[must_use]
pub fn format_stock(pool: &EquipmentPool) -> String {
    pool.iter()
        .map(|entry| {
            let item = entry.item();
            format!(
                "{:<24} {:<16} T{} x{}",
                item.id.as_str(),
                item.category.display_name(),
                item.tier,
                entry.count()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
