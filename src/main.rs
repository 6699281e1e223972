mod cli;

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use notification_hook::config::{self, HookConfig};
use notification_hook::{hook, paths};
use std::io::{IsTerminal, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    // Every failure ends in exit 0.
    if let Err(error) = run().await {
        debug!("notification hook stopped early: {error:#}");
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(config::LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                error.print().context("failed to print usage")?;
                return Ok(());
            }
            return Err(error).context("invalid command line");
        }
    };

    // Deliberately exits instead of blocking on an interactive stdin the way the
    // script-based hook did; a terminal never carries a hook payload.
    if std::io::stdin().is_terminal() {
        bail!("stdin is a terminal; pipe the notification JSON via stdin");
    }
    let mut payload = String::new();
    std::io::stdin()
        .read_to_string(&mut payload)
        .context("failed to read payload from stdin")?;

    let config = HookConfig::from_env();
    let working_dir = paths::current_dir()?;

    let outcome = hook::handle(&config, &working_dir, cli.notify, &payload).await?;
    debug!(
        records = outcome.logged_records,
        announcement = ?outcome.announcement,
        "notification handled"
    );
    Ok(())
}
