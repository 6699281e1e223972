use anyhow::{bail, Context, Result};
use serde_json::Value;

/// The calling tool's own generic idle notification.
pub const WAITING_FOR_INPUT_MESSAGE: &str = "Claude is waiting for your input";

pub fn parse(payload: &str) -> Result<Value> {
    if payload.trim().is_empty() {
        bail!("empty payload");
    }
    serde_json::from_str(payload).context("payload is not valid JSON")
}

pub fn message(event: &Value) -> Option<&Value> {
    event.as_object()?.get("message")
}

/// Non-object events are logged but never announced.
pub fn should_announce(notify: bool, event: &Value) -> bool {
    if !notify || !event.is_object() {
        return false;
    }

    message(event).and_then(Value::as_str) != Some(WAITING_FOR_INPUT_MESSAGE)
}
