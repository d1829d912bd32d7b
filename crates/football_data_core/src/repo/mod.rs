//! Repository layer over the football statistics tables.
//!
//! # Responsibility
//! - Expose existence checks, single lookups and filtered listings per table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every call opens and releases its own session.
//! - Not-found is `Ok(None)` / `Ok(vec![])`, never an error.
//! - Single lookups apply one clause chosen by field precedence; listings
//!   AND-combine every present filter.

pub mod base_repo;
mod filter;
pub mod league_repo;
pub mod player_repo;
pub mod position_repo;
pub mod schedule_repo;
pub mod statistic_category_repo;
pub mod statistic_code_repo;
pub mod statistic_repo;
pub mod team_league_repo;
pub mod team_repo;
pub mod team_staff_repo;
pub mod type_code_repo;
