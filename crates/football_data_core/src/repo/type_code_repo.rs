//! Type code repository.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::type_code::TypeCode;
use rusqlite::{params, Connection, Row};

const TYPE_CODE_SELECT_SQL: &str = "SELECT
    id,
    code,
    description
FROM type_codes";

/// Type code lookup. The first present field wins: `id`, then `code`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCodeLookup {
    pub id: Option<i64>,
    pub code: Option<String>,
}

impl TypeCodeLookup {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    fn filter(&self) -> Option<Filter> {
        if let Some(id) = self.id {
            return Some(Filter::new().eq_int("id", id));
        }
        self.code
            .as_deref()
            .map(|code| Filter::new().eq_text("code", code))
    }
}

pub trait TypeCodeRepository: BaseRepository {
    fn type_code_exists(&self, code: &TypeCode) -> RepoResult<bool>;
    fn get_type_code(&self, lookup: &TypeCodeLookup) -> RepoResult<Option<TypeCode>>;
    fn get_type_codes(&self) -> RepoResult<Vec<TypeCode>>;
}

pub struct SqliteTypeCodeRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteTypeCodeRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteTypeCodeRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl TypeCodeRepository for SqliteTypeCodeRepository<'_> {
    fn type_code_exists(&self, code: &TypeCode) -> RepoResult<bool> {
        let conn = self.db.session()?;
        query_exists(&conn, "type_codes", Filter::new().eq_text("code", &code.code))
    }

    fn get_type_code(&self, lookup: &TypeCodeLookup) -> RepoResult<Option<TypeCode>> {
        let Some(filter) = lookup.filter() else {
            return Ok(None);
        };
        let conn = self.db.session()?;
        query_first(&conn, TYPE_CODE_SELECT_SQL, filter, parse_type_code_row)
    }

    fn get_type_codes(&self) -> RepoResult<Vec<TypeCode>> {
        let conn = self.db.session()?;
        query_all(
            &conn,
            TYPE_CODE_SELECT_SQL,
            Filter::new(),
            parse_type_code_row,
        )
    }
}

impl Record for TypeCode {
    fn table_name(&self) -> &'static str {
        "type_codes"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO type_codes (id, code, description) VALUES (?1, ?2, ?3);",
            params![self.id, self.code, self.description],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn parse_type_code_row(row: &Row<'_>) -> RepoResult<TypeCode> {
    Ok(TypeCode {
        id: row.get("id")?,
        code: row.get("code")?,
        description: row.get("description")?,
    })
}
