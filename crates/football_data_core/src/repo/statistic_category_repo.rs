//! Statistic category repository.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::statistic::StatisticCategory;
use rusqlite::{params, Connection, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT
    id,
    code,
    description
FROM statistic_categories";

/// Category lookup. The first present field wins: `code`, then `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticCategoryLookup {
    pub code: Option<String>,
    pub id: Option<i64>,
}

impl StatisticCategoryLookup {
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

pub trait StatisticCategoryRepository: BaseRepository {
    fn statistic_category_exists(&self, category: &StatisticCategory) -> RepoResult<bool>;
    fn get_statistic_categories(&self) -> RepoResult<Vec<StatisticCategory>>;
    fn get_statistic_category(
        &self,
        lookup: &StatisticCategoryLookup,
    ) -> RepoResult<Option<StatisticCategory>>;
}

pub struct SqliteStatisticCategoryRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteStatisticCategoryRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteStatisticCategoryRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl StatisticCategoryRepository for SqliteStatisticCategoryRepository<'_> {
    fn statistic_category_exists(&self, category: &StatisticCategory) -> RepoResult<bool> {
        let conn = self.db.session()?;
        query_exists(
            &conn,
            "statistic_categories",
            Filter::new().eq_text("code", &category.code),
        )
    }

    fn get_statistic_categories(&self) -> RepoResult<Vec<StatisticCategory>> {
        let conn = self.db.session()?;
        query_all(&conn, CATEGORY_SELECT_SQL, Filter::new(), parse_category_row)
    }

    fn get_statistic_category(
        &self,
        lookup: &StatisticCategoryLookup,
    ) -> RepoResult<Option<StatisticCategory>> {
        let Some(filter) = lookup.filter() else {
            return Ok(None);
        };
        let conn = self.db.session()?;
        query_first(&conn, CATEGORY_SELECT_SQL, filter, parse_category_row)
    }
}

impl Record for StatisticCategory {
    fn table_name(&self) -> &'static str {
        "statistic_categories"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO statistic_categories (id, code, description) VALUES (?1, ?2, ?3);",
            params![self.id, self.code, self.description],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<StatisticCategory> {
    Ok(StatisticCategory {
        id: row.get("id")?,
        code: row.get("code")?,
        description: row.get("description")?,
    })
}
