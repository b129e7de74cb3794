// src/lib.rs
//! credstore-upgrade — one-shot upgrade for a local encrypted credential store
//!
//! Detects the on-disk schema generation of a single-file SQLite store and,
//! when the store predates version tracking, performs an in-place upgrade:
//! backup, additive schema changes, per-row re-encryption, version marker.
//! Stores that already carry a matching version marker are left untouched.

pub mod aliases;
pub mod backup;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod error;
pub mod reencrypt;
pub mod schema;
pub mod upgrade;
pub mod version;

// Re-export everything users need at the crate root
pub use aliases::MasterKey;
pub use cipher::{Cipher, CipherError};
pub use config::Config;
pub use error::{Result, UpgradeError};
pub use reencrypt::{migrate_row, CredentialRecord, LegacyGeneration};
pub use upgrade::{upgrade, UpgradeReport};
