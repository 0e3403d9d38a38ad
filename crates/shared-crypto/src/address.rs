//! # Address Encoding
//!
//! Textual identity for an Ed25519 public key:
//! `BASE32_NOPAD(public_key || checksum)` where `checksum` is the last four
//! bytes of `SHA-512/256(public_key)`. Every address is 58 uppercase characters.

use crate::hashing::sha512_256;
use crate::signatures::PUBLIC_KEY_LEN;
use crate::CryptoError;
use data_encoding::BASE32_NOPAD;

/// Length of the address checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Length of an encoded address in characters.
pub const ADDRESS_LEN: usize = 58;

fn checksum(public_key: &[u8; PUBLIC_KEY_LEN]) -> [u8; CHECKSUM_LEN] {
    let digest = sha512_256(public_key);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    out
}

/// Encode a raw public key as its canonical address.
pub fn encode_address(public_key: &[u8; PUBLIC_KEY_LEN]) -> String {
    let mut raw = [0u8; PUBLIC_KEY_LEN + CHECKSUM_LEN];
    raw[..PUBLIC_KEY_LEN].copy_from_slice(public_key);
    raw[PUBLIC_KEY_LEN..].copy_from_slice(&checksum(public_key));
    BASE32_NOPAD.encode(&raw)
}

/// Decode an address back to its raw public key, validating length and checksum.
pub fn decode_address(address: &str) -> Result<[u8; PUBLIC_KEY_LEN], CryptoError> {
    if address.len() != ADDRESS_LEN {
        return Err(CryptoError::InvalidAddress(format!(
            "expected {} characters, got {}",
            ADDRESS_LEN,
            address.len()
        )));
    }

    let raw = BASE32_NOPAD
        .decode(address.as_bytes())
        .map_err(|e| CryptoError::InvalidAddress(e.to_string()))?;

    if raw.len() != PUBLIC_KEY_LEN + CHECKSUM_LEN {
        return Err(CryptoError::InvalidAddress(format!(
            "expected {} decoded bytes, got {}",
            PUBLIC_KEY_LEN + CHECKSUM_LEN,
            raw.len()
        )));
    }

    let mut public_key = [0u8; PUBLIC_KEY_LEN];
    public_key.copy_from_slice(&raw[..PUBLIC_KEY_LEN]);

    if raw[PUBLIC_KEY_LEN..] != checksum(&public_key) {
        return Err(CryptoError::InvalidAddress("checksum mismatch".into()));
    }

    Ok(public_key)
}
