//! Team, league and team relationship records.

use serde::{Deserialize, Serialize};

/// Row of `team`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<i64>,
    pub url: String,
    /// Short team code, e.g. `KC`.
    pub code: String,
    pub name: String,
}

impl Team {
    pub fn new(url: impl Into<String>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            url: url.into(),
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Row of `team_staff`: a player on a team roster for one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStaff {
    pub id: Option<i64>,
    pub player_id: i64,
    pub team_id: i64,
    pub year_value: i64,
}

impl TeamStaff {
    pub fn new(player_id: i64, team_id: i64, year_value: i64) -> Self {
        Self {
            id: None,
            player_id,
            team_id,
            year_value,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Row of `leages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: Option<i64>,
    pub code: String,
    pub description: String,
}

impl League {
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

/// Row of `team_leagues`: league membership of a team for one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLeague {
    pub id: Option<i64>,
    pub team_id: i64,
    pub league_id: i64,
    pub year_value: i64,
}

impl TeamLeague {
    pub fn new(team_id: i64, league_id: i64, year_value: i64) -> Self {
        Self {
            id: None,
            team_id,
            league_id,
            year_value,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
