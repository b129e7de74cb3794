// tests/common.rs
//! Shared fixtures: on-disk stores for each legacy generation, plus a
//! reversible tagged cipher so tests can decrypt what the upgrade wrote.

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use credstore_upgrade::{Cipher, CipherError, Config, MasterKey};
use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_KEY: &str = "root-master-key";
pub const CURRENT_VERSION: &str = "1.2.0";

/// Idempotent test logging setup; respects RUST_LOG.
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn encode(key: &str, tag: &str, plain: &str) -> String {
    format!("{tag}{}", STANDARD.encode(format!("{key}|{plain}")))
}

fn decode(key: &str, tag: &str, value: &str) -> Result<String, CipherError> {
    let payload = value
        .strip_prefix(tag)
        .ok_or_else(|| CipherError::Malformed(value.to_string()))?;
    let raw = STANDARD
        .decode(payload)
        .map_err(|e| CipherError::Malformed(e.to_string()))?;
    let text = String::from_utf8(raw).map_err(|e| CipherError::Malformed(e.to_string()))?;
    let (stored_key, plain) = text
        .split_once('|')
        .ok_or_else(|| CipherError::Malformed(value.to_string()))?;
    if stored_key != key {
        return Err(CipherError::BadKey(format!("key mismatch for {value}")));
    }
    Ok(plain.to_string())
}

/// Reversible stand-in for the real field cipher. Legacy-scheme values
/// look like `v1:<base64>`, current-scheme values like `v2:<base64>`,
/// with the key baked into the payload so a wrong key is detectable.
pub struct TaggedCipher;

impl Cipher for TaggedCipher {
    fn encrypt(&self, key: &str, plaintext: &str) -> Result<String, CipherError> {
        Ok(encode(key, "v2:", plaintext))
    }

    fn reencrypt(&self, key: &str, legacy_ciphertext: &str) -> Result<String, CipherError> {
        let plain = decode(key, "v1:", legacy_ciphertext)?;
        Ok(encode(key, "v2:", &plain))
    }
}

/// Produce a legacy-scheme ciphertext, as a pre-upgrade store would hold.
pub fn legacy_encrypt(key: &str, plain: &str) -> String {
    encode(key, "v1:", plain)
}

/// Decrypt a current-scheme value written by the upgrade.
pub fn decrypt_current(key: &str, value: &str) -> String {
    decode(key, "v2:", value).expect("value not under the current scheme")
}

pub struct TestStore {
    pub dir: TempDir,
    pub store_path: PathBuf,
    pub backup_dir: PathBuf,
}

impl TestStore {
    fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("data.db");
        let backup_dir = dir.path().join("backups");
        TestStore {
            dir,
            store_path,
            backup_dir,
        }
    }

    pub fn open(&self) -> Connection {
        Connection::open(&self.store_path).unwrap()
    }

    pub fn config(&self) -> Config {
        Config {
            store_path: self.store_path.clone(),
            backup_dir: self.backup_dir.clone(),
            current_version: CURRENT_VERSION.to_string(),
        }
    }

    pub fn master_key(&self) -> MasterKey {
        MasterKey::new(TEST_KEY.to_string())
    }
}

/// 1.0.x-generation store: no secret column, plaintext usernames,
/// legacy-encrypted passwords. `rows` are (username, password) plaintexts.
pub fn v10x_store(rows: &[(&str, &str)]) -> TestStore {
    let store = TestStore::empty();
    let conn = store.open();
    conn.execute_batch(
        "CREATE TABLE account (
            id INTEGER PRIMARY KEY,
            username TEXT,
            password TEXT
        );",
    )
    .unwrap();
    for (username, password) in rows {
        conn.execute(
            "INSERT INTO account (username, password) VALUES (?1, ?2)",
            params![username, legacy_encrypt(TEST_KEY, password)],
        )
        .unwrap();
    }
    store
}

/// 1.1.0-generation store: secret column present, every field under the
/// legacy scheme. `rows` are (username, password, secret) plaintexts.
pub fn v110_store(rows: &[(&str, &str, Option<&str>)]) -> TestStore {
    let store = TestStore::empty();
    let conn = store.open();
    conn.execute_batch(
        "CREATE TABLE account (
            id INTEGER PRIMARY KEY,
            username TEXT,
            password TEXT,
            secret TEXT
        );",
    )
    .unwrap();
    for (username, password, secret) in rows {
        conn.execute(
            "INSERT INTO account (username, password, secret) VALUES (?1, ?2, ?3)",
            params![
                legacy_encrypt(TEST_KEY, username),
                legacy_encrypt(TEST_KEY, password),
                secret.map(|s| legacy_encrypt(TEST_KEY, s)),
            ],
        )
        .unwrap();
    }
    store
}

/// Already-migrated store carrying a version marker.
pub fn current_store(version: &str) -> TestStore {
    let store = TestStore::empty();
    let conn = store.open();
    conn.execute_batch(
        "CREATE TABLE account (
            id INTEGER PRIMARY KEY,
            username TEXT,
            password TEXT,
            secret TEXT,
            access_cnt INT
        );
        CREATE TABLE config (
            name TEXT(200) NOT NULL,
            value TEXT(500) NOT NULL
        );",
    )
    .unwrap();
    conn.execute(
        "INSERT INTO account (username, password, secret) VALUES (?1, ?2, ?3)",
        params![
            TaggedCipher.encrypt(TEST_KEY, "alice").unwrap(),
            TaggedCipher.encrypt(TEST_KEY, "hunter2").unwrap(),
            Option::<String>::None,
        ],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO config (name, value) VALUES ('version', ?1)",
        [version],
    )
    .unwrap();
    store
}

/// Full account table contents, ordered by id, for before/after comparison.
pub fn snapshot_rows(conn: &Connection) -> Vec<(i64, String, String, Option<String>)> {
    let mut stmt = conn
        .prepare("SELECT id, username, password, secret FROM account ORDER BY id")
        .unwrap();
    stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    })
    .unwrap()
    .collect::<rusqlite::Result<Vec<_>>>()
    .unwrap()
}
