use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::config::HookConfig;
use crate::speech::{self, Announcement};
use crate::{event, event_log, paths};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    pub logged_records: usize,
    /// `None` when announcing was not requested or was suppressed.
    pub announcement: Option<Announcement>,
}

/// Logs one notification payload under `working_dir` and announces it when asked to.
pub async fn handle(
    config: &HookConfig,
    working_dir: &Path,
    notify: bool,
    payload: &str,
) -> Result<HookOutcome> {
    let event = event::parse(payload)?;
    let announce = event::should_announce(notify, &event);

    let logged_records = event_log::append(&paths::log_file_path(working_dir), event)?;

    let announcement = if announce {
        Some(speech::announce(config).await)
    } else {
        if notify {
            debug!("announcement suppressed for this event");
        }
        None
    };

    Ok(HookOutcome {
        logged_records,
        announcement,
    })
}
