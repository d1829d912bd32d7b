//! Schedule record.
//!
//! One row per team per game: a game played between two teams is stored
//! twice, once from each side, distinguished by `team_id` and `is_home`.

use serde::{Deserialize, Serialize};

/// Row of `schedule`.
///
/// The natural key is `(team_id, opponent_id, year_value, week_number, type_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Option<i64>,
    pub team_id: i64,
    pub opponent_id: i64,
    pub year_value: i64,
    pub week_number: i64,
    /// External game identifier.
    pub game_id: i64,
    pub url: String,
    /// Soft reference to `type_codes.id` (preseason, regular, ...).
    pub type_id: i64,
    pub is_home: bool,
}

impl Schedule {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        team_id: i64,
        opponent_id: i64,
        year_value: i64,
        week_number: i64,
        game_id: i64,
        url: impl Into<String>,
        type_id: i64,
        is_home: bool,
    ) -> Self {
        Self {
            id: None,
            team_id,
            opponent_id,
            year_value,
            week_number,
            game_id,
            url: url.into(),
            type_id,
            is_home,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
