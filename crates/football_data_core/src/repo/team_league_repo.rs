//! Team league membership repository.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::team::TeamLeague;
use rusqlite::{params, Connection, Row};

const TEAM_LEAGUE_SELECT_SQL: &str = "SELECT
    id,
    team_id,
    league_id,
    year_value
FROM team_leagues";

/// Membership listing options, AND-combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamLeagueListQuery {
    pub team_id: Option<i64>,
    pub league_id: Option<i64>,
}

pub trait TeamLeagueRepository: BaseRepository {
    /// Matches on `(team_id, league_id, year_value)`.
    fn team_league_exists(&self, team_league: &TeamLeague) -> RepoResult<bool>;
    fn get_team_leagues(&self, query: &TeamLeagueListQuery) -> RepoResult<Vec<TeamLeague>>;
    fn get_team_league(&self, id: i64) -> RepoResult<Option<TeamLeague>>;
}

pub struct SqliteTeamLeagueRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteTeamLeagueRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteTeamLeagueRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl TeamLeagueRepository for SqliteTeamLeagueRepository<'_> {
    fn team_league_exists(&self, team_league: &TeamLeague) -> RepoResult<bool> {
        let filter = Filter::new()
            .eq_int("team_id", team_league.team_id)
            .eq_int("league_id", team_league.league_id)
            .eq_int("year_value", team_league.year_value);

        let conn = self.db.session()?;
        query_exists(&conn, "team_leagues", filter)
    }

    fn get_team_leagues(&self, query: &TeamLeagueListQuery) -> RepoResult<Vec<TeamLeague>> {
        let filter = Filter::new()
            .eq_int_opt("team_id", query.team_id)
            .eq_int_opt("league_id", query.league_id);

        let conn = self.db.session()?;
        query_all(&conn, TEAM_LEAGUE_SELECT_SQL, filter, parse_team_league_row)
    }

    fn get_team_league(&self, id: i64) -> RepoResult<Option<TeamLeague>> {
        let conn = self.db.session()?;
        query_first(
            &conn,
            TEAM_LEAGUE_SELECT_SQL,
            Filter::new().eq_int("id", id),
            parse_team_league_row,
        )
    }
}

impl Record for TeamLeague {
    fn table_name(&self) -> &'static str {
        "team_leagues"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO team_leagues (id, team_id, league_id, year_value)
             VALUES (?1, ?2, ?3, ?4);",
            params![self.id, self.team_id, self.league_id, self.year_value],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn parse_team_league_row(row: &Row<'_>) -> RepoResult<TeamLeague> {
    Ok(TeamLeague {
        id: row.get("id")?,
        team_id: row.get("team_id")?,
        league_id: row.get("league_id")?,
        year_value: row.get("year_value")?,
    })
}
