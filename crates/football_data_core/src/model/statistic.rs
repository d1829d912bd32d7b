//! Statistic records and their lookup tables.
//!
//! # Invariants
//! - A `Statistic` is expected to carry exactly one of `player_id` / `team_id`.
//!   This is not enforced; the existence check only constrains the owner
//!   fields that are actually set.

use serde::{Deserialize, Serialize};

/// Row of `statistic_categories` (passing, rushing, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticCategory {
    pub id: Option<i64>,
    pub code: String,
    pub description: String,
}

impl StatisticCategory {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            code: code.into(),
            description: description.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Row of `statistic_codes` (yards, attempts, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticCode {
    pub id: Option<i64>,
    pub code: String,
    pub description: String,
}

impl StatisticCode {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            code: code.into(),
            description: description.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Row of `statistics`: one measured value for a player or team in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub id: Option<i64>,
    pub statistic_code_id: i64,
    pub schedule_id: i64,
    /// Stored as single-precision `REAL`.
    pub value: f32,
    pub category_id: i64,
    pub player_id: Option<i64>,
    pub team_id: Option<i64>,
}

impl Statistic {
    /// Creates a statistic owned by a player.
    pub fn for_player(
        player_id: i64,
        schedule_id: i64,
        category_id: i64,
        statistic_code_id: i64,
        value: f32,
    ) -> Self {
        Self {
            id: None,
            statistic_code_id,
            schedule_id,
            value,
            category_id,
            player_id: Some(player_id),
            team_id: None,
        }
    }

    /// Creates a statistic owned by a team.
    pub fn for_team(
        team_id: i64,
        schedule_id: i64,
        category_id: i64,
        statistic_code_id: i64,
        value: f32,
    ) -> Self {
        Self {
            id: None,
            statistic_code_id,
            schedule_id,
            value,
            category_id,
            player_id: None,
            team_id: Some(team_id),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
