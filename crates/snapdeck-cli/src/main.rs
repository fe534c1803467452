use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use snapdeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "snapdeck")]
#[command(author, version, about = "The student chapter website, one section per screen")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI (default)
    Run {
        /// Content file to show instead of the configured or built-in site
        #[arg(short = 'c', long)]
        content: Option<PathBuf>,
        /// Switch sections instantly instead of sliding
        #[arg(long)]
        reduced_motion: bool,
    },
    /// List the sections of the site
    Sections {
        /// Content file to list instead of the configured or built-in site
        #[arg(short = 'c', long)]
        content: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a content file
    Check {
        /// File to check; defaults to the configured content
        path: Option<PathBuf>,
    },
    /// Write the default configuration file if it does not exist
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;

    match cli.command {
        None => {
            init_logging(&config, true)?;
            commands::run::run(Arc::new(config)).await
        }
        Some(Commands::Run {
            content,
            reduced_motion,
        }) => {
            if content.is_some() {
                config.content.path = content;
            }
            config.ui.reduced_motion |= reduced_motion;
            init_logging(&config, true)?;
            commands::run::run(Arc::new(config)).await
        }
        Some(Commands::Sections { content, json }) => {
            init_logging(&config, false)?;
            let path = content.or_else(|| config.content_path());
            commands::sections::run(path.as_deref(), json).await
        }
        Some(Commands::Check { path }) => {
            init_logging(&config, false)?;
            let path = path.or_else(|| config.content_path());
            commands::check::run(path.as_deref()).await
        }
        Some(Commands::InitConfig) => {
            init_logging(&config, false)?;
            commands::init_config::run(&AppConfig::config_path())
        }
    }
}

/// Install the global subscriber.
///
/// The TUI owns the terminal, so it logs to a file under the data directory;
/// the other commands log to stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
