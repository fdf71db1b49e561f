//! Tailor CLI - element library tooling for the Tailor page builder.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod preview;

#[derive(Parser)]
#[command(name = "tailor")]
#[command(about = "Element library tooling for the Tailor page builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to tailor.toml manifest file
    #[arg(short, long, default_value = "tailor.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the serialized element library for the editor client
    Export {
        /// Output file (defaults to manifest or "library.json")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// List the registered element types
    List,

    /// Serve the element library over HTTP with a preview page
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "7878")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Export { output, compact } => {
            commands::export::run(cli.config, output, compact).await?;
        }
        Commands::List => {
            commands::list::run(cli.config).await?;
        }
        Commands::Serve { port, no_open } => {
            commands::serve::run(cli.config, port, !no_open).await?;
        }
    }

    Ok(())
}
