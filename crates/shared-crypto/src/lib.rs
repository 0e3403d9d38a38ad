//! # Shared Crypto - Authorization Primitives
//!
//! Pluggable primitives used by the challenge-response protocol.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256, SHA-512/256 | Content fingerprints, domain commitments, address checksums |
//! | `signatures` | Ed25519 | Challenge signatures |
//! | `address` | base32 + 4-byte checksum | Textual signer identity |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency for signing
//! - **Address**: Checksummed, rejects any single-character corruption

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use address::{decode_address, encode_address, ADDRESS_LEN};
pub use errors::CryptoError;
pub use hashing::{sha256, sha256_hex, sha512_256, Hash};
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
