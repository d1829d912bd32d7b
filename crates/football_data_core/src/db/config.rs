//! Connection factory configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Where the football database lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbLocation {
    /// SQLite database file on disk.
    File(PathBuf),
    /// Private in-memory database shared by every session of one `Database`.
    Memory,
}

/// Settings used by [`crate::db::Database::open`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub location: DbLocation,
    /// Applied to every session. Callers needing tighter timeouts set it here.
    pub busy_timeout_ms: u64,
    /// When `false`, the schema is expected to be provisioned externally.
    pub apply_migrations: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            location: DbLocation::Memory,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            apply_migrations: true,
        }
    }
}

impl DbConfig {
    /// File-backed configuration with default timeout and migrations enabled.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: DbLocation::File(path.into()),
            ..Self::default()
        }
    }

    /// In-memory configuration with default timeout and migrations enabled.
    pub fn memory() -> Self {
        Self::default()
    }
}
