// src/config.rs
//! Upgrade configuration
//!
//! Everything the orchestrator needs arrives through this struct — no
//! process-wide state. The master key is sourced separately by the caller
//! and never lives in a config file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The single-file credential store to upgrade.
    pub store_path: PathBuf,
    /// Directory receiving the pre-upgrade backup artifact.
    pub backup_dir: PathBuf,
    /// Version string stamped into the config table on success.
    pub current_version: String,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
