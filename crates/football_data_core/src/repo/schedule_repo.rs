//! Schedule repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Existence matches the full natural key
//!   `(team_id, opponent_id, year_value, week_number, type_id)`.
//! - Listing filters are AND-combined; absent filters add no clause.

use super::base_repo::{bool_to_int, int_to_bool, BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::schedule::Schedule;
use rusqlite::{params, Connection, Row};

const SCHEDULE_SELECT_SQL: &str = "SELECT
    id,
    team_id,
    opponent_id,
    year_value,
    week_number,
    game_id,
    url,
    type_id,
    is_home
FROM schedule";

/// Schedule listing options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleListQuery {
    pub team_id: Option<i64>,
    /// Matches `year_value`.
    pub year: Option<i64>,
    /// Matches `week_number`.
    pub week: Option<i64>,
}

impl ScheduleListQuery {
    fn filter(&self) -> Filter {
        Filter::new()
            .eq_int_opt("team_id", self.team_id)
            .eq_int_opt("year_value", self.year)
            .eq_int_opt("week_number", self.week)
    }
}

pub trait ScheduleRepository: BaseRepository {
    fn schedule_exists(&self, schedule: &Schedule) -> RepoResult<bool>;
    fn get_schedule(&self, id: i64) -> RepoResult<Option<Schedule>>;
    fn get_schedules(&self, query: &ScheduleListQuery) -> RepoResult<Vec<Schedule>>;
}

pub struct SqliteScheduleRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteScheduleRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteScheduleRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl ScheduleRepository for SqliteScheduleRepository<'_> {
    fn schedule_exists(&self, schedule: &Schedule) -> RepoResult<bool> {
        let filter = Filter::new()
            .eq_int("team_id", schedule.team_id)
            .eq_int("opponent_id", schedule.opponent_id)
            .eq_int("year_value", schedule.year_value)
            .eq_int("week_number", schedule.week_number)
            .eq_int("type_id", schedule.type_id);

        let conn = self.db.session()?;
        query_exists(&conn, "schedule", filter)
    }

    fn get_schedule(&self, id: i64) -> RepoResult<Option<Schedule>> {
        let conn = self.db.session()?;
        query_first(
            &conn,
            SCHEDULE_SELECT_SQL,
            Filter::new().eq_int("id", id),
            parse_schedule_row,
        )
    }

    fn get_schedules(&self, query: &ScheduleListQuery) -> RepoResult<Vec<Schedule>> {
        let conn = self.db.session()?;
        query_all(&conn, SCHEDULE_SELECT_SQL, query.filter(), parse_schedule_row)
    }
}

impl Record for Schedule {
    fn table_name(&self) -> &'static str {
        "schedule"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO schedule (
                id,
                team_id,
                opponent_id,
                year_value,
                week_number,
                game_id,
                url,
                type_id,
                is_home
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                self.id,
                self.team_id,
                self.opponent_id,
                self.year_value,
                self.week_number,
                self.game_id,
                self.url,
                self.type_id,
                bool_to_int(self.is_home),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn parse_schedule_row(row: &Row<'_>) -> RepoResult<Schedule> {
    Ok(Schedule {
        id: row.get("id")?,
        team_id: row.get("team_id")?,
        opponent_id: row.get("opponent_id")?,
        year_value: row.get("year_value")?,
        week_number: row.get("week_number")?,
        game_id: row.get("game_id")?,
        url: row.get("url")?,
        type_id: row.get("type_id")?,
        is_home: int_to_bool(row.get("is_home")?, "schedule.is_home")?,
    })
}
