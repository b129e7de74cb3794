// src/backup.rs
//! Pre-upgrade backup artifact
//!
//! One snapshot per upgrade invocation, written before any mutation and
//! never touched afterward. Kept even when the run later fails, for
//! manual recovery.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{BACKUP_SUFFIX, BACKUP_TIMESTAMP_FORMAT};
use crate::error::{Result, UpgradeError};

/// Copy the store file to `<backup_dir>/<YYYYMMDDHHMMSS>_data_b4_Upgrade.backup`
/// and return the artifact path.
pub fn backup_store(store_path: &Path, backup_dir: &Path) -> Result<PathBuf> {
    let filename = format!(
        "{}{}",
        Local::now().format(BACKUP_TIMESTAMP_FORMAT),
        BACKUP_SUFFIX
    );
    let artifact = backup_dir.join(filename);

    fs::create_dir_all(backup_dir).map_err(UpgradeError::Backup)?;
    fs::copy(store_path, &artifact).map_err(UpgradeError::Backup)?;

    Ok(artifact)
}
