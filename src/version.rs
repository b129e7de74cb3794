// src/version.rs
//! Version marker storage on the config table
//!
//! Callers must confirm the config table exists before reading; a present
//! table with no version row is a corrupt state and surfaces as
//! `MissingVersionRecord` rather than a silent default.

use rusqlite::{params, Connection, OptionalExtension};

use crate::consts::VERSION_KEY;
use crate::error::{Result, UpgradeError};

pub fn read_version(conn: &Connection) -> Result<String> {
    conn.query_row(
        "SELECT value FROM config WHERE name = ?1",
        [VERSION_KEY],
        |row| row.get(0),
    )
    .optional()?
    .ok_or(UpgradeError::MissingVersionRecord)
}

/// Update-only; the initial insert is `initialize`'s job.
pub fn write_version(conn: &Connection, value: &str) -> Result<()> {
    let changed = conn.execute(
        "UPDATE config SET value = ?1 WHERE name = ?2",
        params![value, VERSION_KEY],
    )?;
    if changed == 0 {
        return Err(UpgradeError::MissingVersionRecord);
    }
    Ok(())
}

/// Create the config table and insert the initial version row as one
/// logical unit. Runs inside the caller's transaction.
pub fn initialize(conn: &Connection, value: &str) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE config (
            name TEXT(200) NOT NULL,
            value TEXT(500) NOT NULL
        );",
    )?;
    conn.execute(
        "INSERT INTO config (name, value) VALUES (?1, ?2)",
        params![VERSION_KEY, value],
    )?;
    Ok(())
}
