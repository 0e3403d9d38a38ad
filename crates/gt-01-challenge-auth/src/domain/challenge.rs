//! # Challenge Builder
//!
//! Constructs the canonical challenge a privileged signer approves: who
//! (`address`), what (`contentHash`), and when (`timestamp`).
//!
//! The serialized string is what the signer hashes, so field order is fixed by
//! the struct declaration and the output is compact `serde_json`. The verifier
//! re-parses the string it receives and never re-serializes it.

use super::errors::ChallengeError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Action tag for governance terms updates.
pub const UPDATE_TERMS_ACTION: &str = "update-terms";

/// Maximum accepted challenge age.
pub const MAX_CHALLENGE_AGE: Duration = Duration::from_secs(5 * 60);

/// Length of the domain commitment prefix in authenticator data (SHA-256 output).
pub const DOMAIN_HASH_LEN: usize = 32;

/// Canonical authorization challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Operation class; must equal [`UPDATE_TERMS_ACTION`]
    pub action: String,
    /// Address expected to sign
    pub address: String,
    /// Lowercase hex SHA-256 of the authorized content
    pub content_hash: String,
    /// Milliseconds since the Unix epoch at construction
    pub timestamp: i64,
}

impl Challenge {
    /// Create an update-terms challenge.
    pub fn new(
        address: impl Into<String>,
        content_hash: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            action: UPDATE_TERMS_ACTION.to_string(),
            address: address.into(),
            content_hash: content_hash.into(),
            timestamp,
        }
    }

    /// Canonical string form.
    pub fn to_canonical_string(&self) -> Result<String, ChallengeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a received challenge string.
    pub fn parse(challenge: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(challenge)
    }
}

/// SHA-256 of the UTF-8 content, as lowercase hex.
pub fn hash_content_hex(content: &str) -> String {
    shared_crypto::sha256_hex(content.as_bytes())
}

/// Build and serialize a challenge stamped with the given time.
pub fn build_challenge_at(
    address: &str,
    content_hash: &str,
    timestamp_ms: i64,
) -> Result<String, ChallengeError> {
    Challenge::new(address, content_hash, timestamp_ms).to_canonical_string()
}

/// Build and serialize a challenge stamped with the current wall-clock time.
pub fn build_challenge(address: &str, content_hash: &str) -> Result<String, ChallengeError> {
    build_challenge_at(address, content_hash, chrono::Utc::now().timestamp_millis())
}
