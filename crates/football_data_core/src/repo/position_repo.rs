//! Position code repository.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::player::Position;
use rusqlite::{params, Connection, Row};

const POSITION_SELECT_SQL: &str = "SELECT
    id,
    code,
    description
FROM position_codes";

/// Position lookup. The first present field wins: `code`, then `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionLookup {
    pub code: Option<String>,
    pub id: Option<i64>,
}

impl PositionLookup {
    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    fn filter(&self) -> Option<Filter> {
        if let Some(code) = self.code.as_deref() {
            return Some(Filter::new().eq_text("code", code));
        }
        self.id.map(|id| Filter::new().eq_int("id", id))
    }
}

pub trait PositionCodeRepository: BaseRepository {
    fn position_code_exists(&self, position: &Position) -> RepoResult<bool>;
    /// Returns `None` without querying when the lookup is empty.
    fn get_position_code(&self, lookup: &PositionLookup) -> RepoResult<Option<Position>>;
    fn get_position_codes(&self) -> RepoResult<Vec<Position>>;
}

pub struct SqlitePositionCodeRepository<'db> {
    db: &'db Database,
}

impl<'db> SqlitePositionCodeRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqlitePositionCodeRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl PositionCodeRepository for SqlitePositionCodeRepository<'_> {
    fn position_code_exists(&self, position: &Position) -> RepoResult<bool> {
        let conn = self.db.session()?;
        query_exists(
            &conn,
            "position_codes",
            Filter::new().eq_text("code", &position.code),
        )
    }

    fn get_position_code(&self, lookup: &PositionLookup) -> RepoResult<Option<Position>> {
        let Some(filter) = lookup.filter() else {
            return Ok(None);
        };
        let conn = self.db.session()?;
        query_first(&conn, POSITION_SELECT_SQL, filter, parse_position_row)
    }

    fn get_position_codes(&self) -> RepoResult<Vec<Position>> {
        let conn = self.db.session()?;
        query_all(&conn, POSITION_SELECT_SQL, Filter::new(), parse_position_row)
    }
}

impl Record for Position {
    fn table_name(&self) -> &'static str {
        "position_codes"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO position_codes (id, code, description) VALUES (?1, ?2, ?3);",
            params![self.id, self.code, self.description],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn parse_position_row(row: &Row<'_>) -> RepoResult<Position> {
    Ok(Position {
        id: row.get("id")?,
        code: row.get("code")?,
        description: row.get("description")?,
    })
}
