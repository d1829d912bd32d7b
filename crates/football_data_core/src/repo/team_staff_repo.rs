//! Team staff (roster) repository.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::team::TeamStaff;
use rusqlite::{params, Connection, Row};

const TEAM_STAFF_SELECT_SQL: &str = "SELECT
    id,
    player_id,
    team_id,
    year_value
FROM team_staff";

/// Roster listing options, AND-combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamStaffListQuery {
    pub team_id: Option<i64>,
    pub player_id: Option<i64>,
}

pub trait TeamStaffRepository: BaseRepository {
    /// Matches on `(player_id, team_id, year_value)`.
    fn team_staff_exists(&self, staff: &TeamStaff) -> RepoResult<bool>;
    fn get_team_staff_entries(&self, query: &TeamStaffListQuery) -> RepoResult<Vec<TeamStaff>>;
    fn get_team_staff_entry(&self, id: i64) -> RepoResult<Option<TeamStaff>>;
}

pub struct SqliteTeamStaffRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteTeamStaffRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteTeamStaffRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl TeamStaffRepository for SqliteTeamStaffRepository<'_> {
    fn team_staff_exists(&self, staff: &TeamStaff) -> RepoResult<bool> {
        let filter = Filter::new()
            .eq_int("team_id", staff.team_id)
            .eq_int("player_id", staff.player_id)
            .eq_int("year_value", staff.year_value);

        let conn = self.db.session()?;
        query_exists(&conn, "team_staff", filter)
    }

    fn get_team_staff_entries(&self, query: &TeamStaffListQuery) -> RepoResult<Vec<TeamStaff>> {
        let filter = Filter::new()
            .eq_int_opt("team_id", query.team_id)
            .eq_int_opt("player_id", query.player_id);

        let conn = self.db.session()?;
        query_all(&conn, TEAM_STAFF_SELECT_SQL, filter, parse_team_staff_row)
    }

    fn get_team_staff_entry(&self, id: i64) -> RepoResult<Option<TeamStaff>> {
        let conn = self.db.session()?;
        query_first(
            &conn,
            TEAM_STAFF_SELECT_SQL,
            Filter::new().eq_int("id", id),
            parse_team_staff_row,
        )
    }
}

impl Record for TeamStaff {
    fn table_name(&self) -> &'static str {
        "team_staff"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO team_staff (id, player_id, team_id, year_value)
             VALUES (?1, ?2, ?3, ?4);",
            params![self.id, self.player_id, self.team_id, self.year_value],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn parse_team_staff_row(row: &Row<'_>) -> RepoResult<TeamStaff> {
    Ok(TeamStaff {
        id: row.get("id")?,
        player_id: row.get("player_id")?,
        team_id: row.get("team_id")?,
        year_value: row.get("year_value")?,
    })
}
