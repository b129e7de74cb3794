// src/upgrade.rs
//! Upgrade orchestrator
//!
//! One linear pass: probe the config table, classify the legacy
//! generation, snapshot the store, then run schema alteration, the
//! re-encryption sweep, and version initialization inside a single
//! transaction. A failure on any path after the backup rolls the store
//! back to its pre-upgrade state.

use std::path::PathBuf;

use log::{debug, info};
use rusqlite::Connection;

use crate::aliases::MasterKey;
use crate::backup::backup_store;
use crate::cipher::Cipher;
use crate::config::Config;
use crate::consts::{ACCOUNT_TABLE, CONFIG_TABLE, SECRET_COLUMN};
use crate::error::{Result, UpgradeError};
use crate::reencrypt::{reencrypt_all, LegacyGeneration};
use crate::{schema, version};

/// What an upgrade run did. `message` is the user-facing summary and is
/// empty when the store was already current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeReport {
    pub generation: Option<LegacyGeneration>,
    pub backup_path: Option<PathBuf>,
    pub message: String,
}

impl UpgradeReport {
    fn already_current() -> Self {
        UpgradeReport {
            generation: None,
            backup_path: None,
            message: String::new(),
        }
    }
}

/// Run the one-shot upgrade against the store named in `config`.
pub fn upgrade(config: &Config, master_key: &MasterKey, cipher: &dyn Cipher) -> Result<UpgradeReport> {
    let mut conn = Connection::open(&config.store_path)?;
    run(&mut conn, config, master_key, cipher)
}

fn run(
    conn: &mut Connection,
    config: &Config,
    master_key: &MasterKey,
    cipher: &dyn Cipher,
) -> Result<UpgradeReport> {
    if schema::table_exists(conn, CONFIG_TABLE)? {
        let stored = version::read_version(conn)?;
        if stored == config.current_version {
            debug!("store already at version {stored}, nothing to do");
            return Ok(UpgradeReport::already_current());
        }
        // An unknown stored version means data this routine does not
        // understand; stamping the current version over it would hide that.
        return Err(UpgradeError::VersionMismatch {
            stored,
            current: config.current_version.clone(),
        });
    }

    let generation = if schema::column_exists(conn, ACCOUNT_TABLE, SECRET_COLUMN)? {
        LegacyGeneration::EncryptedV110
    } else {
        LegacyGeneration::BareV10x
    };
    info!("legacy {} store detected", generation.label());

    // Snapshot must exist before the first write.
    let backup_path = backup_store(&config.store_path, &config.backup_dir)?;
    info!("backup written to {}", backup_path.display());

    let tx = conn.transaction()?;
    alter_schema(&tx, generation)?;
    let rows = reencrypt_all(&tx, cipher, master_key.as_str(), generation)?;
    version::initialize(&tx, &config.current_version)?;
    tx.commit()?;

    info!(
        "upgraded {rows} account rows from {} to {}",
        generation.label(),
        config.current_version
    );
    Ok(UpgradeReport {
        message: format!(
            "Data file is converted from old version({}). Backup could be found at {}",
            generation.label(),
            backup_path.display()
        ),
        generation: Some(generation),
        backup_path: Some(backup_path),
    })
}

/// Additive column changes; 1.0.x stores also gain the secret column so
/// the sweep can address it (its value stays NULL).
fn alter_schema(conn: &Connection, generation: LegacyGeneration) -> Result<()> {
    conn.execute("ALTER TABLE account ADD COLUMN access_cnt INT", [])
        .map_err(UpgradeError::SchemaAlteration)?;
    if generation == LegacyGeneration::BareV10x {
        conn.execute("ALTER TABLE account ADD COLUMN secret TEXT", [])
            .map_err(UpgradeError::SchemaAlteration)?;
    }
    Ok(())
}
