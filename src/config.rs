use std::path::PathBuf;

use crate::paths;

pub const ELEVENLABS_API_KEY: &str = "ELEVENLABS_API_KEY";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENGINEER_NAME: &str = "ENGINEER_NAME";
pub const HOOK_DIR: &str = "NOTIFICATION_HOOK_DIR";
pub const TTS_RUNNER: &str = "NOTIFICATION_TTS_RUNNER";
pub const LOG_FILTER: &str = "NOTIFICATION_HOOK_LOG";

const DEFAULT_RUNNER: &[&str] = &["uv", "run"];

/// Command prefix used to launch a helper script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    pub program: String,
    pub args: Vec<String>,
}

impl Runner {
    fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split_whitespace().map(ToOwned::to_owned);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            program: DEFAULT_RUNNER[0].to_string(),
            args: DEFAULT_RUNNER[1..].iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

/// Everything the hook reads from its environment, captured once at startup.
#[derive(Debug, Clone, Default)]
pub struct HookConfig {
    pub elevenlabs_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub engineer_name: Option<String>,
    /// `None` when the hook directory could not be resolved; no helper is selectable then.
    pub tts_dir: Option<PathBuf>,
    pub runner: Runner,
}

impl HookConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), paths::executable_dir().ok())
    }

    pub fn from_lookup<F>(lookup: F, default_hook_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let hook_dir = non_empty(HOOK_DIR).map(PathBuf::from).or(default_hook_dir);
        let runner = non_empty(TTS_RUNNER)
            .as_deref()
            .and_then(Runner::parse)
            .unwrap_or_default();

        Self {
            elevenlabs_api_key: non_empty(ELEVENLABS_API_KEY),
            openai_api_key: non_empty(OPENAI_API_KEY),
            engineer_name: lookup(ENGINEER_NAME)
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
            tts_dir: hook_dir.as_deref().map(paths::tts_dir),
            runner,
        }
    }
}
