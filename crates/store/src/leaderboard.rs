//! Leaderboard store.
//!
//! The file holds a JSON array of `{"time": "MM/DD/YYYY, HH:MM:SS", "score": n}`
//! objects, highest score first.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::types::{LeaderboardItem, TIMESTAMP_FORMAT};

/// Read the leaderboard; missing, empty or corrupt files yield an empty list.
pub fn read_leaderboard(path: &Path) -> Vec<LeaderboardItem> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    if text.trim().is_empty() {
        return Vec::new();
    }

    serde_json::from_str(&text).unwrap_or_else(|err| {
        warn!(path = %path.display(), %err, "ignoring corrupt leaderboard file");
        Vec::new()
    })
}

/// Overwrite the leaderboard file with `items`.
pub fn write_leaderboard(path: &Path, items: &[LeaderboardItem]) -> Result<()> {
    let json = serde_json::to_string(items).context("serialize leaderboard")?;
    fs::write(path, json).with_context(|| format!("write leaderboard to {}", path.display()))?;
    debug!(path = %path.display(), entries = items.len(), "leaderboard saved");
    Ok(())
}

/// Local time in the leaderboard's timestamp format.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_uses_time_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores-round-trip.json");
        let items = vec![
            LeaderboardItem::new("01/02/2024, 10:11:12", 30),
            LeaderboardItem::new("01/01/2024, 09:00:00", 10),
        ];
        write_leaderboard(&path, &items).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"time\":\"01/02/2024, 10:11:12\""));
        assert_eq!(read_leaderboard(&path), items);
    }

    #[test]
    fn missing_or_empty_file_is_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores-missing.json");
        assert!(read_leaderboard(&path).is_empty());
        fs::write(&path, "  \n").unwrap();
        assert!(read_leaderboard(&path).is_empty());
        fs::write(&path, "[{\"time\":").unwrap();
        assert!(read_leaderboard(&path).is_empty());
    }

    #[test]
    fn timestamp_has_expected_shape() {
        let ts = timestamp_now();
        // MM/DD/YYYY, HH:MM:SS
        assert_eq!(ts.len(), 20);
        assert_eq!(&ts[2..3], "/");
        assert_eq!(&ts[10..12], ", ");
    }
}
