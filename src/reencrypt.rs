// src/reencrypt.rs
//! Per-row credential re-encryption
//!
//! `migrate_row` is the pure per-field transform table; `reencrypt_all`
//! sweeps the account table and writes rows back by primary key. Row order
//! carries no dependency, and the first failing row aborts the sweep so
//! the caller's transaction rolls everything back.

use rusqlite::{params, Connection};

use crate::cipher::Cipher;
use crate::error::{Result, UpgradeError};

/// Originating generation of a pre-version-tracking store, decided once
/// per run from the presence of the `secret` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyGeneration {
    /// 1.0.x — no `secret` column; usernames stored as plaintext.
    BareV10x,
    /// 1.1.0 — `secret` column present; every field under the legacy cipher.
    EncryptedV110,
}

impl LegacyGeneration {
    /// User-facing version label for the upgrade summary.
    pub fn label(self) -> &'static str {
        match self {
            LegacyGeneration::BareV10x => "1.0.x",
            LegacyGeneration::EncryptedV110 => "1.1.0",
        }
    }
}

/// One credential row as stored in the account table. `secret` is NULL
/// for every row of a 1.0.x store (the column is added right before the
/// sweep).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub secret: Option<String>,
}

/// Transform a single row to the current encryption scheme.
///
/// - username: first-time `encrypt` for 1.0.x (stored plaintext),
///   `reencrypt` for 1.1.0
/// - password: always `reencrypt` — encrypted in both generations
/// - secret: pass-through for 1.0.x (NULL), `reencrypt` for 1.1.0
pub fn migrate_row(
    row: &CredentialRecord,
    cipher: &dyn Cipher,
    key: &str,
    generation: LegacyGeneration,
) -> Result<CredentialRecord> {
    let wrap = |source| UpgradeError::Reencryption { id: row.id, source };

    let username = match generation {
        LegacyGeneration::BareV10x => cipher.encrypt(key, &row.username),
        LegacyGeneration::EncryptedV110 => cipher.reencrypt(key, &row.username),
    }
    .map_err(wrap)?;

    let password = cipher.reencrypt(key, &row.password).map_err(wrap)?;

    let secret = match generation {
        LegacyGeneration::BareV10x => row.secret.clone(),
        LegacyGeneration::EncryptedV110 => match &row.secret {
            Some(value) => Some(cipher.reencrypt(key, value).map_err(wrap)?),
            None => None,
        },
    };

    Ok(CredentialRecord {
        id: row.id,
        username,
        password,
        secret,
    })
}

/// Re-encrypt every account row in place; returns the row count.
/// Must run inside the upgrade transaction.
pub fn reencrypt_all(
    conn: &Connection,
    cipher: &dyn Cipher,
    key: &str,
    generation: LegacyGeneration,
) -> Result<usize> {
    let mut select = conn.prepare("SELECT id, username, password, secret FROM account")?;
    let rows = select
        .query_map([], |row| {
            Ok(CredentialRecord {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                secret: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut update =
        conn.prepare("UPDATE account SET username = ?1, password = ?2, secret = ?3 WHERE id = ?4")?;
    for row in &rows {
        let migrated = migrate_row(row, cipher, key, generation)?;
        update.execute(params![
            migrated.username,
            migrated.password,
            migrated.secret,
            migrated.id
        ])?;
    }

    Ok(rows.len())
}
