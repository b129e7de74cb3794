// src/schema.rs
//! Live schema introspection
//!
//! Read-only probes against the store's current metadata, not a cached
//! snapshot — alterations made earlier in the same run are visible.
//! Identifiers go through rusqlite's structured pragma call, never string
//! interpolation.

use rusqlite::Connection;

use crate::error::Result;

/// Column names of `table` in declaration order; empty when the table
/// does not exist.
pub fn list_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut columns = Vec::new();
    conn.pragma(None, "table_info", table, |row| {
        columns.push(row.get::<_, String>(1)?);
        Ok(())
    })?;
    Ok(columns)
}

/// True iff the table's descriptor query returns at least one column.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    Ok(!list_columns(conn, table)?.is_empty())
}

/// Case-sensitive exact match against the inspected column names.
pub fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    Ok(list_columns(conn, table)?.iter().any(|c| c == column))
}
