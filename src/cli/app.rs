//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{achievable, demand, links, reconcile};
use crate::source::Config;

#[derive(Parser)]
#[command(name = "eggshell")]
#[command(author, version, about = "Inventory and combination tracking for the egg assembly event")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the combinations the inventory can assemble
    Achievable {
        /// Path to the combination list
        #[arg(long, short = 'c')]
        combinations: Option<PathBuf>,

        /// Path to the inventory paste
        #[arg(long, short = 'i')]
        inventory: Option<PathBuf>,
    },

    /// Report fragments still needed and fragments in surplus
    Reconcile {
        /// Path to the combination list
        #[arg(long, short = 'c')]
        combinations: Option<PathBuf>,

        /// Path to the inventory paste
        #[arg(long, short = 'i')]
        inventory: Option<PathBuf>,
    },

    /// Show total demand per fragment across the combination list
    Demand {
        /// Path to the combination list
        #[arg(long, short = 'c')]
        combinations: Option<PathBuf>,
    },

    /// Emit lookup links for every combination
    Links {
        /// Path to the combination list
        #[arg(long, short = 'c')]
        combinations: Option<PathBuf>,

        /// Insert a post break after this many combinations
        #[arg(long)]
        break_at: Option<usize>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Achievable {
            combinations,
            inventory,
        } => achievable::run(
            &output,
            &config.combinations_path(combinations.as_deref()),
            &config.inventory_path(inventory.as_deref()),
        )?,

        Commands::Reconcile {
            combinations,
            inventory,
        } => reconcile::run(
            &output,
            &config.combinations_path(combinations.as_deref()),
            &config.inventory_path(inventory.as_deref()),
        )?,

        Commands::Demand { combinations } => {
            demand::run(&output, &config.combinations_path(combinations.as_deref()))?
        }

        Commands::Links {
            combinations,
            break_at,
        } => links::run(
            &output,
            &config.combinations_path(combinations.as_deref()),
            config.break_at(break_at),
        )?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
