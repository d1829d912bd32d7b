//! Statistic code repository.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::statistic::StatisticCode;
use rusqlite::{params, Connection, Row};

const STATISTIC_CODE_SELECT_SQL: &str = "SELECT
    id,
    code,
    description
FROM statistic_codes";

/// Statistic code lookup. The first present field wins: `id`, then `code`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticCodeLookup {
    pub id: Option<i64>,
    pub code: Option<String>,
}

impl StatisticCodeLookup {
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

pub trait StatisticCodeRepository: BaseRepository {
    fn statistic_code_exists(&self, code: &StatisticCode) -> RepoResult<bool>;
    fn get_statistic_code(&self, lookup: &StatisticCodeLookup)
        -> RepoResult<Option<StatisticCode>>;
    fn get_statistic_codes(&self) -> RepoResult<Vec<StatisticCode>>;
}

pub struct SqliteStatisticCodeRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteStatisticCodeRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteStatisticCodeRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl StatisticCodeRepository for SqliteStatisticCodeRepository<'_> {
    fn statistic_code_exists(&self, code: &StatisticCode) -> RepoResult<bool> {
        let conn = self.db.session()?;
        query_exists(
            &conn,
            "statistic_codes",
            Filter::new().eq_text("code", &code.code),
        )
    }

    fn get_statistic_code(
        &self,
        lookup: &StatisticCodeLookup,
    ) -> RepoResult<Option<StatisticCode>> {
        let Some(filter) = lookup.filter() else {
            return Ok(None);
        };
        let conn = self.db.session()?;
        query_first(&conn, STATISTIC_CODE_SELECT_SQL, filter, parse_code_row)
    }

    fn get_statistic_codes(&self) -> RepoResult<Vec<StatisticCode>> {
        let conn = self.db.session()?;
        query_all(
            &conn,
            STATISTIC_CODE_SELECT_SQL,
            Filter::new(),
            parse_code_row,
        )
    }
}

impl Record for StatisticCode {
    fn table_name(&self) -> &'static str {
        "statistic_codes"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO statistic_codes (id, code, description) VALUES (?1, ?2, ?3);",
            params![self.id, self.code, self.description],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn parse_code_row(row: &Row<'_>) -> RepoResult<StatisticCode> {
    Ok(StatisticCode {
        id: row.get("id")?,
        code: row.get("code")?,
        description: row.get("description")?,
    })
}
