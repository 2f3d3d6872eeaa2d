use anyhow::Result;
use clap::{Parser, Subcommand};
use muster::commands::{check, validate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "muster")]
#[command(about = "Deliverable completeness validation CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a manifest against the filesystem and report per-stage results
    Check {
        /// Path to the manifest file
        #[arg(default_value = "muster.toml")]
        manifest: PathBuf,

        /// Directory against which relative target paths are resolved
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Parse and validate a manifest without probing its targets
    Validate {
        /// Path to the manifest file
        #[arg(default_value = "muster.toml")]
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            manifest,
            root,
            json,
        } => {
            let code = check::execute(&manifest, &root, json)?;
            std::process::exit(code);
        }
        Commands::Validate { manifest } => validate::execute(&manifest),
    }
}

/// Initialize tracing to stderr; RUST_LOG overrides the default filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "muster=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
