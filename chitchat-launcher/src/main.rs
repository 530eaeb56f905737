//! ChitChat Launcher
//!
//! Brings the installed client binary in sync with the latest release,
//! then hands off execution to it. Any update failure is shown to the
//! user and the client is not launched.

mod display;

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chitchat_core::{UpdateConfig, UpdateOutcome, Updater};

#[derive(Parser)]
#[command(name = "chitchat-launcher")]
#[command(version, about = "Updates and launches the ChitChat client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Install directory (default: platform data dir + "ChitChat")
    #[arg(long, global = true)]
    install_dir: Option<PathBuf>,

    /// Release download base URL
    #[arg(long, global = true, env = "CHITCHAT_RELEASE_URL")]
    release_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check for updates and install if needed, without launching
    Check,

    /// Render a release-notes markdown file to the terminal
    Notes {
        /// Markdown file to render
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let install_dir = cli.install_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ChitChat")
    });

    let mut config = UpdateConfig::default().with_install_dir(install_dir);
    if let Some(url) = cli.release_url {
        config = config.with_release_url(url);
    }

    match cli.command {
        Some(Commands::Check) => {
            run_update(config).await?;
        }
        Some(Commands::Notes { file }) => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            display::render_notes(&text);
        }
        None => {
            let binary_path = run_update(config).await?;
            display::info("Launching ChitChat");
            Command::new(&binary_path)
                .spawn()
                .with_context(|| format!("failed to launch {}", binary_path.display()))?;
        }
    }

    Ok(())
}

/// Run the update and report the outcome. Returns the client binary path.
async fn run_update(config: UpdateConfig) -> Result<PathBuf> {
    let updater = Updater::new(config)?;

    let mut observer = display::ProgressDisplay::new();
    let outcome = updater
        .update_app(&mut observer)
        .await
        .context("update failed")?;
    observer.finish();

    match outcome {
        UpdateOutcome::Installed { .. } => display::info("Client updated"),
        UpdateOutcome::UpToDate => display::info("Client is up to date"),
    }

    Ok(updater.binary_path())
}
