//! Player and position records.

use serde::{Deserialize, Serialize};

/// Row of `players`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Option<i64>,
    /// Source profile url. Existence checks match on this value.
    pub url: String,
    pub name: String,
    /// Soft reference to `position_codes.id`.
    pub position_id: Option<i64>,
}

impl Player {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            url: url.into(),
            name: name.into(),
            position_id: None,
        }
    }

    /// Pins the primary key used on insert.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_position(mut self, position_id: i64) -> Self {
        self.position_id = Some(position_id);
        self
    }
}

/// Row of `position_codes` (lookup table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: Option<i64>,
    pub code: String,
    pub description: String,
}

impl Position {
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
