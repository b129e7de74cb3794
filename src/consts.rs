// src/consts.rs
//! Shared constants — store layout and backup naming

/// Credential table; assumed present in every store generation.
pub const ACCOUNT_TABLE: &str = "account";

/// Configuration table; its absence marks a pre-version-tracking store.
pub const CONFIG_TABLE: &str = "config";

/// Name of the single version row in the config table.
pub const VERSION_KEY: &str = "version";

/// Column whose absence identifies a 1.0.x-generation store.
pub const SECRET_COLUMN: &str = "secret";

/// Usage counter added by the upgrade; NULL until first use.
pub const ACCESS_COUNT_COLUMN: &str = "access_cnt";

/// Backup artifacts are `<timestamp><suffix>` under the backup directory.
pub const BACKUP_SUFFIX: &str = "_data_b4_Upgrade.backup";

// %Y%m%d%H%M%S, local time
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
