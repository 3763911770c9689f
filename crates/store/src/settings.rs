//! Settings store.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::types::Settings;

/// Read the settings file.
///
/// Returns `None` when the file is missing, empty or not a valid record.
/// Keys absent from an otherwise valid record take their default, and values
/// below a field's floor are raised to it.
pub fn read_settings(path: &Path) -> Option<Settings> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), %err, "settings file not readable");
            return None;
        }
    };
    if text.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<Settings>(&text) {
        Ok(settings) => Some(settings.sanitized()),
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring corrupt settings file");
            None
        }
    }
}

/// Settings from disk, or the defaults.
pub fn load_settings(path: &Path) -> Settings {
    read_settings(path).unwrap_or_default()
}

/// Settings from disk; when none are stored, write the defaults first.
pub fn ensure_settings(path: &Path) -> Settings {
    if let Some(settings) = read_settings(path) {
        return settings;
    }
    let settings = Settings::default();
    if let Err(err) = write_settings(path, &settings) {
        warn!(%err, "could not write default settings");
    }
    settings
}

/// Overwrite the settings file.
pub fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string(settings).context("serialize settings")?;
    fs::write(path, json).with_context(|| format!("write settings to {}", path.display()))?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}
