//! Type code record.

use serde::{Deserialize, Serialize};

/// Row of `type_codes` (lookup table for schedule types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCode {
    pub id: Option<i64>,
    pub code: String,
    pub description: String,
}

impl TypeCode {
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
