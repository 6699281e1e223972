use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_NAME: &str = "notification.json";

pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("could not resolve current working directory")
}

/// Directory holding the hook executable; helper scripts are looked up relative to it.
pub fn executable_dir() -> Result<PathBuf> {
    let executable =
        std::env::current_exe().context("failed to resolve current executable path")?;
    executable
        .parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("{} has no parent directory", executable.display()))
}

pub fn log_dir(working_dir: &Path) -> PathBuf {
    working_dir.join(LOG_DIR_NAME)
}

pub fn log_file_path(working_dir: &Path) -> PathBuf {
    log_dir(working_dir).join(LOG_FILE_NAME)
}

pub fn tts_dir(hook_dir: &Path) -> PathBuf {
    hook_dir.join("utils").join("tts")
}
