//! Session token generation and hashing.
//!
//! The raw token travels only in the session cookie; the database stores
//! its SHA-256 digest, so a leaked sessions table cannot be replayed.

use rand::RngCore;
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;

/// Generates a fresh random session token, returned as lowercase hex.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Digest stored in the `sesiones` table for a raw token.
pub fn hash_session_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}
