// src/cipher.rs
//! Encryption collaborator seam
//!
//! The upgrade only decides *when* each transform applies; the transforms
//! themselves are supplied by the caller through this trait. Field values
//! are stored as text blobs, so both operations work on strings.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("malformed ciphertext: {0}")]
    Malformed(String),

    #[error("undecryptable payload (wrong key?): {0}")]
    BadKey(String),
}

pub trait Cipher {
    /// First-time encryption of a plaintext value under the current scheme.
    fn encrypt(&self, key: &str, plaintext: &str) -> Result<String, CipherError>;

    /// Decrypt a value stored under the legacy scheme and re-encrypt it
    /// under the current one, preserving the plaintext.
    fn reencrypt(&self, key: &str, legacy_ciphertext: &str) -> Result<String, CipherError>;
}
