use clap::{Parser, Subcommand};
use disaster_kb_core::{DEFAULT_ID_PREFIX, DEFAULT_MIN_INCIDENTS};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "archive/DisasterDeclarationsSummaries_.csv";
pub const DEFAULT_OUTPUT: &str = "backend/data/fema_historical_insights.json";

#[derive(Parser)]
#[command(name = "disaster-kb")]
#[command(version)]
#[command(about = "Build a retrieval knowledge base from FEMA disaster declarations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a declarations CSV into knowledge base JSON
    Build {
        /// Path to the declarations summary CSV
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Where to write the knowledge base JSON
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Drop groups with this many incidents or fewer
        #[arg(long, default_value_t = DEFAULT_MIN_INCIDENTS)]
        min_incidents: usize,

        /// Prefix for generated entry ids
        #[arg(long, default_value = DEFAULT_ID_PREFIX)]
        id_prefix: String,
    },

    /// Summarize an existing knowledge base
    Inspect {
        /// Path to knowledge base JSON
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print version information
    Version,
}
