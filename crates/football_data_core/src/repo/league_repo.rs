//! League repository over the `leages` table.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::team::League;
use rusqlite::{params, Connection, Row};

// Table name spelling is fixed by existing databases.
const LEAGUE_TABLE: &str = "leages";

const LEAGUE_SELECT_SQL: &str = "SELECT
    id,
    code,
    description
FROM leages";

/// League lookup. The first present field wins: `id`, then `code`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueLookup {
    pub id: Option<i64>,
    pub code: Option<String>,
}

impl LeagueLookup {
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

pub trait LeagueRepository: BaseRepository {
    fn league_exists(&self, league: &League) -> RepoResult<bool>;
    fn get_league(&self, lookup: &LeagueLookup) -> RepoResult<Option<League>>;
    fn get_leagues(&self) -> RepoResult<Vec<League>>;
}

pub struct SqliteLeagueRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteLeagueRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteLeagueRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl LeagueRepository for SqliteLeagueRepository<'_> {
    fn league_exists(&self, league: &League) -> RepoResult<bool> {
        let conn = self.db.session()?;
        query_exists(
            &conn,
            LEAGUE_TABLE,
            Filter::new().eq_text("code", &league.code),
        )
    }

    fn get_league(&self, lookup: &LeagueLookup) -> RepoResult<Option<League>> {
        let Some(filter) = lookup.filter() else {
            return Ok(None);
        };
        let conn = self.db.session()?;
        query_first(&conn, LEAGUE_SELECT_SQL, filter, parse_league_row)
    }

    fn get_leagues(&self) -> RepoResult<Vec<League>> {
        let conn = self.db.session()?;
        query_all(&conn, LEAGUE_SELECT_SQL, Filter::new(), parse_league_row)
    }
}

impl Record for League {
    fn table_name(&self) -> &'static str {
        LEAGUE_TABLE
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO leages (id, code, description) VALUES (?1, ?2, ?3);",
            params![self.id, self.code, self.description],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn parse_league_row(row: &Row<'_>) -> RepoResult<League> {
    Ok(League {
        id: row.get("id")?,
        code: row.get("code")?,
        description: row.get("description")?,
    })
}
