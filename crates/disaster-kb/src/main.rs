mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            min_incidents,
            id_prefix,
        } => commands::build::run(&commands::build::BuildOptions {
            input,
            output,
            min_incidents,
            id_prefix,
        }),
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
        Commands::Version => commands::version::run(),
    }
}
