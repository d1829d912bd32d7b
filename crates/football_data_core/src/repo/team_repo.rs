//! Team repository contracts and SQLite implementation.
//!
//! # Invariants
//! - A team exists when any stored row shares its `code` or its `url`.
//! - `get_team` applies exactly one clause, chosen in the order
//!   `code`, `url`, `id`, `name`.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::team::Team;
use rusqlite::{params, Connection, Row};

const TEAM_SELECT_SQL: &str = "SELECT
    id,
    url,
    code,
    name
FROM team";

/// Team lookup. Later fields are ignored once an earlier one is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamLookup {
    pub code: Option<String>,
    pub url: Option<String>,
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl TeamLookup {
    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn by_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    fn filter(&self) -> Option<Filter> {
        if let Some(code) = self.code.as_deref() {
            return Some(Filter::new().eq_text("code", code));
        }
        if let Some(url) = self.url.as_deref() {
            return Some(Filter::new().eq_text("url", url));
        }
        if let Some(id) = self.id {
            return Some(Filter::new().eq_int("id", id));
        }
        self.name
            .as_deref()
            .map(|name| Filter::new().eq_text("name", name))
    }
}

pub trait TeamRepository: BaseRepository {
    fn team_exists(&self, team: &Team) -> RepoResult<bool>;
    fn get_teams(&self) -> RepoResult<Vec<Team>>;
    fn get_team(&self, lookup: &TeamLookup) -> RepoResult<Option<Team>>;
}

pub struct SqliteTeamRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteTeamRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteTeamRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl TeamRepository for SqliteTeamRepository<'_> {
    fn team_exists(&self, team: &Team) -> RepoResult<bool> {
        let filter =
            Filter::new().any_text(&[("code", team.code.as_str()), ("url", team.url.as_str())]);
        let conn = self.db.session()?;
        query_exists(&conn, "team", filter)
    }

    fn get_teams(&self) -> RepoResult<Vec<Team>> {
        let conn = self.db.session()?;
        query_all(&conn, TEAM_SELECT_SQL, Filter::new(), parse_team_row)
    }

    fn get_team(&self, lookup: &TeamLookup) -> RepoResult<Option<Team>> {
        let Some(filter) = lookup.filter() else {
            return Ok(None);
        };
        let conn = self.db.session()?;
        query_first(&conn, TEAM_SELECT_SQL, filter, parse_team_row)
    }
}

impl Record for Team {
    fn table_name(&self) -> &'static str {
        "team"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO team (id, url, code, name) VALUES (?1, ?2, ?3, ?4);",
            params![self.id, self.url, self.code, self.name],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn parse_team_row(row: &Row<'_>) -> RepoResult<Team> {
    Ok(Team {
        id: row.get("id")?,
        url: row.get("url")?,
        code: row.get("code")?,
        name: row.get("name")?,
    })
}
