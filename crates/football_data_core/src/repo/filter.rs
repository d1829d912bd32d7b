//! Equality predicate builder shared by every repository.
//!
//! # Invariants
//! - Column names are compile-time constants; only values are bound.
//! - Top-level clauses are always AND-combined.
//! - Listings are ordered by `id ASC` so results are deterministic.

use super::base_repo::RepoResult;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

/// Collected `column = ?` clauses plus their bound values.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Filter {
    clauses: Vec<String>,
    binds: Vec<Value>,
}

impl Filter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn eq_int(mut self, column: &'static str, value: i64) -> Self {
        self.clauses.push(format!("{column} = ?"));
        self.binds.push(Value::Integer(value));
        self
    }

    pub(crate) fn eq_text(mut self, column: &'static str, value: &str) -> Self {
        self.clauses.push(format!("{column} = ?"));
        self.binds.push(Value::Text(value.to_string()));
        self
    }

    /// Adds `column = value` only when `value` is present.
    pub(crate) fn eq_int_opt(self, column: &'static str, value: Option<i64>) -> Self {
        match value {
            Some(value) => self.eq_int(column, value),
            None => self,
        }
    }

    /// Adds one parenthesized group matching when any pair matches.
    pub(crate) fn any_text(mut self, pairs: &[(&'static str, &str)]) -> Self {
        if pairs.is_empty() {
            return self;
        }
        let group = pairs
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(" OR ");
        self.clauses.push(format!("({group})"));
        self.binds.extend(
            pairs
                .iter()
                .map(|(_, value)| Value::Text((*value).to_string())),
        );
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Renders ` WHERE ...`, or an empty string when no clause was added.
    pub(crate) fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    fn into_binds(self) -> Vec<Value> {
        self.binds
    }
}

/// Runs `select_sql` with `filter` and maps every row.
pub(crate) fn query_all<T>(
    conn: &Connection,
    select_sql: &str,
    filter: Filter,
    parse: fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<Vec<T>> {
    let sql = format!("{select_sql}{} ORDER BY id ASC;", filter.where_sql());
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(filter.into_binds()))?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse(row)?);
    }
    Ok(items)
}

/// Runs `select_sql` with `filter` and maps the first row, if any.
pub(crate) fn query_first<T>(
    conn: &Connection,
    select_sql: &str,
    filter: Filter,
    parse: fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<Option<T>> {
    let sql = format!(
        "{select_sql}{} ORDER BY id ASC LIMIT 1;",
        filter.where_sql()
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(filter.into_binds()))?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse(row)?));
    }
    Ok(None)
}

/// Returns whether any row of `table` matches `filter`.
pub(crate) fn query_exists(conn: &Connection, table: &str, filter: Filter) -> RepoResult<bool> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {table}{});",
        filter.where_sql()
    );
    let exists: i64 = conn.query_row(&sql, params_from_iter(filter.into_binds()), |row| {
        row.get(0)
    })?;
    Ok(exists == 1)
}
