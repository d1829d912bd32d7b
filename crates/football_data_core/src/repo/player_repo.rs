//! Player repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Existence checks, single lookups and position-filtered listings over
//!   `players`.
//!
//! # Invariants
//! - `get_player` with an empty lookup queries without predicate and returns
//!   the first stored player.
//! - `get_players` resolves `position_code` through `position_codes`; an
//!   unknown code falls back to `position_id`, or to the unfiltered list.

use super::base_repo::{BaseRepository, Record, RepoResult};
use super::filter::{query_all, query_exists, query_first, Filter};
use crate::db::Database;
use crate::model::player::Player;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const PLAYER_SELECT_SQL: &str = "SELECT
    id,
    url,
    name,
    position_id
FROM players";

/// Single-player lookup. The first present field wins: `url`, then `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerLookup {
    pub url: Option<String>,
    pub id: Option<i64>,
}

impl PlayerLookup {
    pub fn by_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    fn filter(&self) -> Filter {
        if let Some(url) = self.url.as_deref() {
            return Filter::new().eq_text("url", url);
        }
        if let Some(id) = self.id {
            return Filter::new().eq_int("id", id);
        }
        Filter::new()
    }
}

/// Player listing options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerListQuery {
    pub position_id: Option<i64>,
    /// Resolved to a position id; a match overrides `position_id`.
    pub position_code: Option<String>,
}

/// Repository interface for player queries.
pub trait PlayerRepository: BaseRepository {
    fn player_exists(&self, player: &Player) -> RepoResult<bool>;
    fn get_player(&self, lookup: &PlayerLookup) -> RepoResult<Option<Player>>;
    fn get_players(&self, query: &PlayerListQuery) -> RepoResult<Vec<Player>>;
}

/// SQLite-backed player repository.
pub struct SqlitePlayerRepository<'db> {
    db: &'db Database,
}

impl<'db> SqlitePlayerRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl BaseRepository for SqlitePlayerRepository<'_> {
    fn database(&self) -> &Database {
        self.db
    }
}

impl PlayerRepository for SqlitePlayerRepository<'_> {
    fn player_exists(&self, player: &Player) -> RepoResult<bool> {
        let conn = self.db.session()?;
        query_exists(&conn, "players", Filter::new().eq_text("url", &player.url))
    }

    fn get_player(&self, lookup: &PlayerLookup) -> RepoResult<Option<Player>> {
        let filter = lookup.filter();
        if filter.is_empty() {
            debug!("event=player_lookup module=repo status=unfiltered");
        }
        let conn = self.db.session()?;
        query_first(&conn, PLAYER_SELECT_SQL, filter, parse_player_row)
    }

    fn get_players(&self, query: &PlayerListQuery) -> RepoResult<Vec<Player>> {
        let conn = self.db.session()?;

        let mut position_id = query.position_id;
        if let Some(code) = query.position_code.as_deref().filter(|code| !code.is_empty()) {
            match position_id_for_code(&conn, code)? {
                Some(id) => position_id = Some(id),
                None => debug!(
                    "event=player_position_fallback module=repo status=miss has_position_id={}",
                    position_id.is_some()
                ),
            }
        }

        let filter = match position_id.filter(|id| *id != 0) {
            Some(id) => Filter::new().eq_int("position_id", id),
            None => Filter::new(),
        };
        query_all(&conn, PLAYER_SELECT_SQL, filter, parse_player_row)
    }
}

impl Record for Player {
    fn table_name(&self) -> &'static str {
        "players"
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<i64> {
        conn.execute(
            "INSERT INTO players (id, url, name, position_id) VALUES (?1, ?2, ?3, ?4);",
            params![self.id, self.url, self.name, self.position_id],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn position_id_for_code(conn: &Connection, code: &str) -> RepoResult<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT id FROM position_codes WHERE code = ?1 ORDER BY id ASC LIMIT 1;",
            [code],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(id)
}

fn parse_player_row(row: &Row<'_>) -> RepoResult<Player> {
    Ok(Player {
        id: row.get("id")?,
        url: row.get("url")?,
        name: row.get("name")?,
        position_id: row.get("position_id")?,
    })
}

#[cfg(test)]
mod tests {
    use super::PlayerLookup;

    #[test]
    fn url_takes_precedence_over_id() {
        let lookup = PlayerLookup {
            url: Some("www.player.com".to_string()),
            id: Some(7),
        };
        assert_eq!(lookup.filter().where_sql(), " WHERE url = ?");
    }

    #[test]
    fn empty_lookup_has_no_predicate() {
        assert!(PlayerLookup::default().filter().is_empty());
    }
}
