//! Statistic repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Existence checks, id lookups and owner/game listings over `statistics`.
//!
//! # Invariants
//! - Existence always matches `(schedule_id, category_id, statistic_code_id)`.
//! - `player_id` / `team_id` join the existence predicate only when the
//!   candidate sets them to a non-zero value, so a candidate without a player
//!   matches any stored row sharing the base triple.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::statistic::Statistic;
use rusqlite::{params, Connection, Row};

const STATISTIC_SELECT_SQL: &str = "SELECT
    id,
    statistic_code_id,
    player_id,
    team_id,
    schedule_id,
    value,
    category_id
FROM statistics";

/// Statistic listing options, AND-combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatisticListQuery {
    pub player_id: Option<i64>,
    pub team_id: Option<i64>,
    pub schedule_id: Option<i64>,
}

impl StatisticListQuery {
    fn filter(&self) -> Filter {
        Filter::new()
            .eq_int_opt("player_id", self.player_id)
            .eq_int_opt("team_id", self.team_id)
            .eq_int_opt("schedule_id", self.schedule_id)
    }
}

pub trait StatisticRepository: BaseRepository {
    fn statistic_exists(&self, statistic: &Statistic) -> RepoResult<bool>;
    fn get_statistics(&self, query: &StatisticListQuery) -> RepoResult<Vec<Statistic>>;
    fn get_statistic(&self, id: i64) -> RepoResult<Option<Statistic>>;
}

pub struct SqliteStatisticRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteStatisticRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqliteStatisticRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl StatisticRepository for SqliteStatisticRepository<'_> {
    fn statistic_exists(&self, statistic: &Statistic) -> RepoResult<bool> {
        let conn = self.db.session()?;
        query_exists(&conn, "statistics", existence_filter(statistic))
    }

    fn get_statistics(&self, query: &StatisticListQuery) -> RepoResult<Vec<Statistic>> {
        let conn = self.db.session()?;
        query_all(
            &conn,
            STATISTIC_SELECT_SQL,
            query.filter(),
            parse_statistic_row,
        )
    }

    fn get_statistic(&self, id: i64) -> RepoResult<Option<Statistic>> {
        let conn = self.db.session()?;
        query_first(
            &conn,
            STATISTIC_SELECT_SQL,
            Filter::new().eq_int("id", id),
            parse_statistic_row,
        )
    }
}

impl Record for Statistic {
    fn table_name(&self) -> &'static str {
        "statistics"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO statistics (
                id,
                statistic_code_id,
                player_id,
                team_id,
                schedule_id,
                value,
                category_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                self.id,
                self.statistic_code_id,
                self.player_id,
                self.team_id,
                self.schedule_id,
                f64::from(self.value),
                self.category_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn existence_filter(statistic: &Statistic) -> Filter {
    Filter::new()
        .eq_int("schedule_id", statistic.schedule_id)
        .eq_int("category_id", statistic.category_id)
        .eq_int("statistic_code_id", statistic.statistic_code_id)
        .eq_int_opt("player_id", statistic.player_id.filter(|id| *id != 0))
        .eq_int_opt("team_id", statistic.team_id.filter(|id| *id != 0))
}

fn parse_statistic_row(row: &Row<'_>) -> RepoResult<Statistic> {
    let value: f64 = row.get("value")?;
    Ok(Statistic {
        id: row.get("id")?,
        statistic_code_id: row.get("statistic_code_id")?,
        schedule_id: row.get("schedule_id")?,
        value: value as f32,
        category_id: row.get("category_id")?,
        player_id: row.get("player_id")?,
        team_id: row.get("team_id")?,
    })
}
