//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use leetsync::output::OutputMode;

/// leetsync - Sync accepted LeetCode submissions into a solutions tree
#[derive(Parser, Debug)]
#[command(
    name = "leetsync",
    version,
    about = "Sync accepted LeetCode submissions into a solutions tree",
    long_about = "Sync accepted LeetCode submissions into a solutions tree.\n\n\
                  Each accepted problem becomes one markdown file per difficulty folder.\n\
                  Files are only rewritten when their content changes, and the README's\n\
                  statistics regions are refreshed in place."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create leetsync.toml and add the README regions
    Init {
        /// Overwrite an existing leetsync.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Sync accepted submissions into the solutions tree and README
    Sync {
        /// Config file (default: ./leetsync.toml, then ~/.leetsync/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Read submissions from a JSON export instead of the configured source
        #[arg(long)]
        source_file: Option<PathBuf>,

        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Sync {
            config,
            source_file,
            dry_run,
        }) => commands::sync(config.as_deref(), source_file, dry_run, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("leetsync v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("leetsync v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'leetsync --help' for usage");
                println!("Run 'leetsync init' to get started");
            }
            Ok(())
        },
    }
}
