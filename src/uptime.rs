//! System uptime
//!
//! Reads /proc/uptime and floors it into whole days.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeDelta};

use crate::config::{PROC_UPTIME, SECONDS_PER_DAY};

/// Whole seconds since boot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uptime {
    seconds: u64,
}

impl Uptime {
    pub fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn as_secs(&self) -> u64 {
        self.seconds
    }

    /// Whole days since boot (floor)
    pub fn days(&self) -> u64 {
        self.seconds / SECONDS_PER_DAY
    }

    /// Local time of the last boot, if it can be represented
    pub fn boot_time(&self) -> Option<DateTime<Local>> {
        let secs = i64::try_from(self.seconds).ok()?;
        let delta = TimeDelta::try_seconds(secs)?;
        Local::now().checked_sub_signed(delta)
    }
}

/// Parse the contents of /proc/uptime
///
/// Only the first field is used and its fractional part is dropped,
/// e.g. "2592000.53 10234.11" is 2592000 seconds.
pub fn parse_uptime(contents: &str) -> Result<Uptime, UptimeError> {
    let field = contents
        .split_whitespace()
        .next()
        .ok_or_else(|| UptimeError::Parse("empty uptime".to_string()))?;

    let whole = field.split('.').next().unwrap_or(field);
    let seconds = whole
        .parse::<u64>()
        .map_err(|e| UptimeError::Parse(format!("'{}': {}", field, e)))?;

    Ok(Uptime::from_secs(seconds))
}

/// Read uptime from a specific file (for testing)
pub fn read_uptime_from(path: &Path) -> Result<Uptime, UptimeError> {
    let contents = std::fs::read_to_string(path).map_err(|source| UptimeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_uptime(&contents)
}

/// Read uptime from /proc/uptime
pub fn read_uptime() -> Result<Uptime, UptimeError> {
    read_uptime_from(Path::new(PROC_UPTIME))
}

#[derive(Debug, thiserror::Error)]
pub enum UptimeError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid uptime: {0}")]
    Parse(String),
}
