//! Troop Armory - Development Tools

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use armory_tools::rebalance::{format_stock, run_rebalance, RebalanceOptions};

#[derive(Parser)]
#[command(name = "armory-tools")]
#[command(about = "Development tools for the troop armory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate data files
    Validate {
        /// Path to data directory
        #[arg(default_value = "assets/data")]
        path: String,
    },
    /// Run one liquidation and replenishment cycle over a stock snapshot
    Rebalance {
        /// Path to data directory
        #[arg(default_value = "assets/data")]
        path: String,
        /// Party headcount; omit to simulate having no party
        #[arg(long)]
        headcount: Option<u32>,
        /// RNG seed, overriding armory.ron
        #[arg(long)]
        seed: Option<u64>,
        /// Write the remaining stock to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating data files in: {path}");
            match armory_tools::validate::validate_data_directory(Path::new(&path)) {
                Ok(summary) => tracing::info!(
                    "Validation passed: {} items, {} thresholds, {} stocked units",
                    summary.items,
                    summary.thresholds,
                    summary.stocked_units
                ),
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Rebalance {
            path,
            headcount,
            seed,
            output,
        } => {
            let options = RebalanceOptions { headcount, seed };
            let run = match run_rebalance(Path::new(&path), options) {
                Ok(run) => run,
                Err(e) => {
                    tracing::error!("Rebalance failed: {e}");
                    std::process::exit(1);
                }
            };

            println!("{}", run.report);
            println!("{}", format_stock(&run.pool));

            if let Some(output) = output {
                if let Err(e) = armory_tools::loader::write_stock(&output, &run.stock()) {
                    tracing::error!("{e}");
                    std::process::exit(1);
                }
                tracing::info!("Remaining stock written to {}", output.display());
            }
        }
    }
}
