//! Connection factory for SQLite sessions.
//!
//! # Responsibility
//! - Open file or shared in-memory SQLite databases.
//! - Apply migrations once at open time when configured.
//! - Open one fresh, configured connection per repository call.
//!
//! # Invariants
//! - In-memory data lives as long as the `Database` anchor connection.
//! - In-memory databases use the `memdb` VFS so sessions take ordinary file
//!   locks and honor the busy timeout.
//! - Sessions are independent connections; dropping one releases it.

use super::config::{DbConfig, DbLocation};
use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Shared connection factory used by every repository.
#[derive(Debug)]
pub struct Database {
    uri: String,
    busy_timeout: Duration,
    // Keeps a memdb database alive between sessions.
    _anchor: Option<Mutex<Connection>>,
}

impl Database {
    /// Opens a database according to `config`.
    ///
    /// # Side effects
    /// - Applies pending migrations when `config.apply_migrations` is set.
    /// - Emits `db_open` logging events with duration and status.
    pub fn open(config: &DbConfig) -> DbResult<Self> {
        let started_at = Instant::now();
        let mode = mode_label(&config.location);
        info!("event=db_open module=db status=start mode={mode}");

        match Self::bootstrap(config) {
            Ok(database) => {
                info!(
                    "event=db_open module=db status=ok mode={mode} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(database)
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode={mode} duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens (or creates) a database file and applies all pending migrations.
    pub fn open_file(path: impl AsRef<Path>) -> DbResult<Self> {
        Self::open(&DbConfig::file(path.as_ref()))
    }

    /// Opens a private in-memory database and applies all pending migrations.
    pub fn open_in_memory() -> DbResult<Self> {
        Self::open(&DbConfig::memory())
    }

    /// Opens a new session against this database.
    ///
    /// The returned connection is released when dropped.
    pub fn session(&self) -> DbResult<Connection> {
        let conn = Connection::open(&self.uri)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }

    fn bootstrap(config: &DbConfig) -> DbResult<Self> {
        let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
        let (uri, anchor) = match &config.location {
            DbLocation::File(path) => (path.to_string_lossy().into_owned(), None),
            DbLocation::Memory => {
                let uri = format!(
                    "file:/football_data_{}?vfs=memdb",
                    Uuid::new_v4().simple()
                );
                let anchor = Connection::open(&uri)?;
                (uri, Some(anchor))
            }
        };

        let mut conn = match anchor {
            Some(anchor) => anchor,
            None => Connection::open(&uri)?,
        };
        conn.busy_timeout(busy_timeout)?;
        if config.apply_migrations {
            apply_migrations(&mut conn)?;
        }

        let anchor = match config.location {
            DbLocation::Memory => Some(Mutex::new(conn)),
            DbLocation::File(_) => None,
        };

        Ok(Self {
            uri,
            busy_timeout,
            _anchor: anchor,
        })
    }
}

fn mode_label(location: &DbLocation) -> &'static str {
    match location {
        DbLocation::File(_) => "file",
        DbLocation::Memory => "memory",
    }
}
