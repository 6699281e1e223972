use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the log array. A missing or unparseable file yields an empty log.
pub fn load(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    // Invalid UTF-8 lands in the corrupt branch along with any other parse error.
    match serde_json::from_slice::<Value>(&raw) {
        Ok(Value::Array(records)) => Ok(records),
        Ok(_) => bail!("{} does not hold a JSON array", path.display()),
        Err(error) => {
            warn!(path = %path.display(), %error, "discarding corrupt notification log");
            Ok(Vec::new())
        }
    }
}

pub fn save(path: &Path, records: &[Value]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let raw =
        serde_json::to_string_pretty(records).context("failed to serialize notification log")?;
    fs::write(path, format!("{raw}\n"))
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Appends one event and rewrites the whole file. Returns the new record count.
///
/// There is no locking: concurrent writers race and the last one wins.
pub fn append(path: &Path, event: Value) -> Result<usize> {
    let mut records = load(path)?;
    records.push(event);
    save(path, &records)?;
    debug!(path = %path.display(), records = records.len(), "notification logged");
    Ok(records.len())
}
