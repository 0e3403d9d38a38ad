//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{SignaturePayload, VerificationResult};
use crate::domain::errors::ChallengeError;

/// Challenge-response authorization API.
///
/// Implementations must be thread-safe (`Send + Sync`); verification holds no
/// shared mutable state.
pub trait ChallengeAuthApi: Send + Sync {
    /// SHA-256 content fingerprint as lowercase hex.
    fn hash_content_hex(&self, content: &str) -> String;

    /// Build the serialized challenge an external signer must sign.
    fn build_challenge(&self, address: &str, content_hash: &str)
        -> Result<String, ChallengeError>;

    /// Accept `payload` iff every binding to `expected_address` and
    /// `authoritative_content` holds.
    fn verify_challenge_response(
        &self,
        payload: &SignaturePayload,
        expected_address: &str,
        authoritative_content: &str,
    ) -> VerificationResult;
}
