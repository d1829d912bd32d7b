//! Shared save primitives and repository error type.
//!
//! # Responsibility
//! - Define the `Record` insert contract implemented by every model.
//! - Provide transactional `save` / `save_all` to all repositories.
//!
//! # Invariants
//! - Each call opens its own session and transaction; nothing is held across
//!   calls.
//! - `save_all` commits every record or none of them.
//! - Store errors are passed through untouched (no retry, no translation).

use crate::db::{Database, DbError};
use log::debug;
use rusqlite::{Connection, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for repository persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl RepoError {
    /// Returns the underlying SQLite error, if any.
    pub fn as_sqlite(&self) -> Option<&rusqlite::Error> {
        match self {
            Self::Db(err) => err.as_sqlite(),
            Self::InvalidData(_) => None,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// A model that knows how to insert itself as one row.
pub trait Record {
    /// Target table name.
    fn table_name(&self) -> &'static str;

    /// Inserts the row and returns the primary key the store assigned.
    ///
    /// A pinned `id` is inserted as-is; `None` lets SQLite allocate one.
    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64>;
}

/// Save primitives shared by every repository.
pub trait BaseRepository {
    /// Connection factory used to open one session per call.
    fn database(&self) -> &Database;

    /// Inserts one record in its own transaction and returns its key.
    fn save(&self, record: &dyn Record) -> RepoResult<i64> {
        let table = record.table_name();
        let mut conn = self.database().session()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let id = match record.insert(&tx) {
            Ok(id) => id,
            Err(err) => {
                debug!("event=repo_save module=repo status=error table={table} error={err}");
                return Err(err.into());
            }
        };
        tx.commit()?;

        debug!("event=repo_save module=repo status=ok table={table} id={id}");
        Ok(id)
    }

    /// Inserts all records in one transaction and returns keys in input order.
    ///
    /// Any failure rolls back the whole batch.
    fn save_all(&self, records: &[&dyn Record]) -> RepoResult<Vec<i64>> {
        let mut conn = self.database().session()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut ids = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match record.insert(&tx) {
                Ok(id) => ids.push(id),
                Err(err) => {
                    debug!(
                        "event=repo_save_all module=repo status=error table={} index={index} count={} error={err}",
                        record.table_name(),
                        records.len()
                    );
                    return Err(err.into());
                }
            }
        }
        tx.commit()?;

        debug!(
            "event=repo_save_all module=repo status=ok count={}",
            records.len()
        );
        Ok(ids)
    }
}

/// Repository exposing only the shared save primitives.
pub struct SqliteBaseRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteBaseRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteBaseRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}
