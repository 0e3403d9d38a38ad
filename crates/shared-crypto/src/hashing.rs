//! # SHA-2 Hashing
//!
//! One-shot helpers over the `sha2` crate.
//!
//! - SHA-256 fingerprints content and commits to the signing domain
//! - SHA-512/256 provides the address checksum

use sha2::{Digest, Sha256, Sha512_256};

/// 256-bit digest.
pub type Hash = [u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash data with SHA-256 and render it as lowercase hex, two digits per byte.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Hash data with SHA-512/256 (one-shot).
pub fn sha512_256(data: &[u8]) -> Hash {
    Sha512_256::digest(data).into()
}
