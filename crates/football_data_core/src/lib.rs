//! Data-access layer for football statistics stored in SQLite.
//! Repositories here are the only code that reads or writes the tables.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{Database, DbConfig, DbError, DbLocation, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::player::{Player, Position};
pub use model::schedule::Schedule;
pub use model::statistic::{Statistic, StatisticCategory, StatisticCode};
pub use model::team::{League, Team, TeamLeague, TeamStaff};
pub use model::type_code::TypeCode;
pub use repo::base_repo::{BaseRepository, Record, RepoError, RepoResult, SqliteBaseRepository};
pub use repo::league_repo::{LeagueLookup, LeagueRepository, SqliteLeagueRepository};
pub use repo::player_repo::{
    PlayerListQuery, PlayerLookup, PlayerRepository, SqlitePlayerRepository,
};
pub use repo::position_repo::{
    PositionCodeRepository, PositionLookup, SqlitePositionCodeRepository,
};
pub use repo::schedule_repo::{ScheduleListQuery, ScheduleRepository, SqliteScheduleRepository};
pub use repo::statistic_category_repo::{
    SqliteStatisticCategoryRepository, StatisticCategoryLookup, StatisticCategoryRepository,
};
pub use repo::statistic_code_repo::{
    SqliteStatisticCodeRepository, StatisticCodeLookup, StatisticCodeRepository,
};
pub use repo::statistic_repo::{
    SqliteStatisticRepository, StatisticListQuery, StatisticRepository,
};
pub use repo::team_league_repo::{
    SqliteTeamLeagueRepository, TeamLeagueListQuery, TeamLeagueRepository,
};
pub use repo::team_repo::{SqliteTeamRepository, TeamLookup, TeamRepository};
pub use repo::team_staff_repo::{
    SqliteTeamStaffRepository, TeamStaffListQuery, TeamStaffRepository,
};
pub use repo::type_code_repo::{SqliteTypeCodeRepository, TypeCodeLookup, TypeCodeRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
