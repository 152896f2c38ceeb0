//! # board-sync
//!
//! Automation pipeline for a README-based contract/job listing board.
//!
//! Two paths, both driven by the CI runner:
//! - **ingest**: an issue event carries a structured submission; extract
//!   it, validate the mandatory fields, and write it to the Supabase
//!   backend over RPC.
//! - **render**: on a schedule, fetch current listings and analytics,
//!   regenerate the Markdown tables, and splice them into the README's
//!   marker-delimited regions.

pub mod actions;
pub mod backend;
pub mod config;
pub mod ingest;
pub mod issue;
pub mod listing;
pub mod regenerate;
pub mod render;
pub mod splice;
pub mod supabase;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[clap(
    name = "board-sync",
    version,
    about = "Ingest contract submissions and regenerate README listing tables"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process an issue event: create or update the posting it carries
    Ingest {
        /// Path to the event payload JSON; defaults to GITHUB_EVENT_PATH
        #[clap(long)]
        event: Option<PathBuf>,
    },
    /// Regenerate the contract tables and analytics sections in the README
    RenderContracts {
        /// Path to the README to splice
        #[clap(long)]
        readme: PathBuf,
    },
    /// Regenerate the job tables and counters section in the README
    RenderJobs {
        /// Path to the README to splice
        #[clap(long)]
        readme: PathBuf,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main().
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ingest { event } => {
            let outcome = ingest::run_ingest(event).await?;
            info!(?outcome, "ingest finished");
            println!("Ingest complete: {outcome:?}");
        }
        Commands::RenderContracts { readme } => {
            let report = regenerate::run_contracts(&readme).await?;
            println!(
                "Updated README with {} contracts ({} urgent, {} high, {} normal)",
                report.total, report.urgent, report.high, report.normal
            );
        }
        Commands::RenderJobs { readme } => {
            let report = regenerate::run_jobs(&readme).await?;
            println!(
                "Updated README with {} jobs ({} faang, {} quant, {} other)",
                report.total, report.faang, report.quant, report.other
            );
        }
    }
    Ok(())
}
