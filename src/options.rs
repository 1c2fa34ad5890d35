//! Evaluation options
//!
//! [`FindOptions`] is the opaque context handed to every predicate's
//! `initialize`. Most predicates ignore it entirely; age-based predicates
//! read the run's start time from it so that one walk evaluates every entry
//! against the same instant.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Context shared by every predicate in one evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindOptions {
    /// Start of the run, in milliseconds since the Unix epoch. Age-based
    /// predicates measure entry age relative to this instant.
    #[serde(default = "default_start_time_ms")]
    pub start_time_ms: u64,
}

impl FindOptions {
    /// Options with the start time captured now.
    pub fn new() -> Self {
        FindOptions {
            start_time_ms: default_start_time_ms(),
        }
    }

    /// Pin the start time, e.g. for reproducible runs.
    pub fn with_start_time_ms(mut self, start_time_ms: u64) -> Self {
        self.start_time_ms = start_time_ms;
        self
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse options")
    }

    /// Load options from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read options file {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Default start time: now.
fn default_start_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
