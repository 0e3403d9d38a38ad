//! Seed handling.

use shared_crypto::Ed25519KeyPair;
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("seed must be 64 hex characters")]
    InvalidSeed,
}

/// Parse a hex-encoded 32-byte Ed25519 seed.
pub fn parse_seed(hex_seed: &str) -> Result<Ed25519KeyPair, KeyError> {
    let bytes = Zeroizing::new(hex::decode(hex_seed.trim()).map_err(|_| KeyError::InvalidSeed)?);
    let seed: Zeroizing<[u8; 32]> = Zeroizing::new(
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSeed)?,
    );
    Ok(Ed25519KeyPair::from_seed(*seed))
}
