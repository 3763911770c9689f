//! File logging.
//!
//! The terminal is in raw alternate-screen mode while the game runs, so logs
//! only go to a file, and only when `SNAKE_LOG_PATH` is set. Filtering follows
//! `RUST_LOG` (default `info`).

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the subscriber. Returns whether logging is enabled.
pub fn init() -> Result<bool> {
    let Some(path) = std::env::var("SNAKE_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))?;
    Ok(true)
}
