use std::path::PathBuf;

use crate::config::HookConfig;

/// Speech helper tiers, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    ElevenLabs,
    OpenAi,
    Pyttsx3,
}

impl Backend {
    pub const PRIORITY: [Backend; 3] = [Backend::ElevenLabs, Backend::OpenAi, Backend::Pyttsx3];

    pub fn script_name(self) -> &'static str {
        match self {
            Backend::ElevenLabs => "elevenlabs_tts.py",
            Backend::OpenAi => "openai_tts.py",
            Backend::Pyttsx3 => "pyttsx3_tts.py",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Backend::ElevenLabs => "elevenlabs",
            Backend::OpenAi => "openai",
            Backend::Pyttsx3 => "pyttsx3",
        }
    }

    fn is_enabled(self, config: &HookConfig) -> bool {
        match self {
            Backend::ElevenLabs => config.elevenlabs_api_key.is_some(),
            Backend::OpenAi => config.openai_api_key.is_some(),
            Backend::Pyttsx3 => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedBackend {
    pub backend: Backend,
    pub script: PathBuf,
}

/// Picks the first enabled backend whose helper script exists on disk.
pub fn select(config: &HookConfig) -> Option<SelectedBackend> {
    let tts_dir = config.tts_dir.as_deref()?;

    Backend::PRIORITY
        .into_iter()
        .filter(|backend| backend.is_enabled(config))
        .map(|backend| SelectedBackend {
            backend,
            script: tts_dir.join(backend.script_name()),
        })
        .find(|selected| selected.script.is_file())
}
