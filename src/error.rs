// src/error.rs
//! Public error type for the entire crate

use crate::cipher::CipherError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UpgradeError>;

#[derive(Error, Debug)]
pub enum UpgradeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    /// Backup could not be written; nothing has been mutated yet.
    #[error("backup failed before upgrade could start: {0}")]
    Backup(std::io::Error),

    #[error("schema alteration rejected: {0}")]
    SchemaAlteration(rusqlite::Error),

    #[error("re-encryption failed for account id {id}: {source}")]
    Reencryption { id: i64, source: CipherError },

    /// The config table exists but carries no `version` row.
    #[error("config table has no version record")]
    MissingVersionRecord,

    /// Stored version is neither current nor a known legacy starting point.
    #[error("no upgrade path from stored version {stored:?} to {current:?}")]
    VersionMismatch { stored: String, current: String },
}
