use anyhow::{anyhow, bail, Context, Result};
use rand::Rng;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

use crate::backend::{self, Backend};
use crate::config::{HookConfig, Runner};

pub const ANNOUNCE_TIMEOUT: Duration = Duration::from_secs(10);
/// Chance of addressing the engineer by name when one is configured.
pub const PERSONALIZE_PROBABILITY: f64 = 0.3;

const BASE_MESSAGE: &str = "The agent is waiting for input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    NoBackend,
    Delivered { backend: Backend, message: String },
    Failed { backend: Backend, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

/// `roll` is a uniform sample from `[0, 1)`.
pub fn compose_message(engineer_name: Option<&str>, roll: f64) -> String {
    match engineer_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) if roll < PERSONALIZE_PROBABILITY => {
            format!("{name}, the agent is waiting for input")
        }
        _ => BASE_MESSAGE.to_string(),
    }
}

pub fn build_command(runner: &Runner, script: &Path, message: &str) -> Result<SpeechCommand> {
    let program = which::which(&runner.program)
        .with_context(|| format!("{} not found in PATH", runner.program))?;

    let mut args: Vec<OsString> = runner.args.iter().map(OsString::from).collect();
    args.push(script.as_os_str().to_owned());
    args.push(OsString::from(message));

    Ok(SpeechCommand { program, args })
}

/// Runs the helper to completion, discarding its output. The child is killed
/// if `timeout` elapses first.
pub async fn deliver(command: &SpeechCommand, timeout: Duration) -> Result<()> {
    let child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("failed to execute {}", command.program.display()))?;

    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .map_err(|_| {
            anyhow!(
                "{} timed out after {:?}",
                command.program.display(),
                timeout
            )
        })?
        .with_context(|| format!("failed to wait for {}", command.program.display()))?;

    if !output.status.success() {
        bail!("{} exited with {}", command.program.display(), output.status);
    }

    Ok(())
}

/// Best-effort announcement. Never fails; problems end up in the returned value.
pub async fn announce(config: &HookConfig) -> Announcement {
    announce_with(config, rand::rng().random::<f64>(), ANNOUNCE_TIMEOUT).await
}

async fn announce_with(config: &HookConfig, roll: f64, timeout: Duration) -> Announcement {
    let Some(selected) = backend::select(config) else {
        debug!("no speech helper available, skipping announcement");
        return Announcement::NoBackend;
    };

    let message = compose_message(config.engineer_name.as_deref(), roll);
    let result = match build_command(&config.runner, &selected.script, &message) {
        Ok(command) => deliver(&command, timeout).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => {
            debug!(backend = selected.backend.label(), %message, "announced notification");
            Announcement::Delivered {
                backend: selected.backend,
                message,
            }
        }
        Err(error) => {
            debug!(backend = selected.backend.label(), "announcement failed: {error:#}");
            Announcement::Failed {
                backend: selected.backend,
                reason: format!("{error:#}"),
            }
        }
    }
}
