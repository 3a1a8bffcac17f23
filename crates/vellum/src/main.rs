//! Vellum CLI - author tooling for documentation site descriptors.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "vellum")]
#[command(about = "Author tooling for documentation site descriptors")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file (defaults to vellum.toml/.json/.yaml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a config file and sample docs in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Check the config for empty entries and links to missing documents
    Check,

    /// Print the navigation and sidebar trees with resolved URLs
    Nav,

    /// Write the resolved descriptor as JSON for the site generator
    Export {
        /// Output file (defaults to <out_dir>/vellum.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
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
        Commands::Init { yes } => {
            commands::init::run(cli.config, yes).await?;
        }
        Commands::Check => {
            commands::check::run(cli.config).await?;
        }
        Commands::Nav => {
            commands::nav::run(cli.config).await?;
        }
        Commands::Export { output } => {
            commands::export::run(cli.config, output).await?;
        }
    }

    Ok(())
}
