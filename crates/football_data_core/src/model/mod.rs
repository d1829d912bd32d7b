//! Plain record types for the football statistics tables.
//!
//! # Responsibility
//! - Describe one row shape per table, with column-named fields.
//! - Stay free of persistence behavior; SQL lives in `repo`.
//!
//! # Invariants
//! - `id == None` means the store assigns the key on insert.
//! - Cross-table references (`position_id`, `team_id`, ...) are soft
//!   references resolved by value lookup, never enforced foreign keys.

pub mod player;
pub mod schedule;
pub mod statistic;
pub mod team;
pub mod type_code;
