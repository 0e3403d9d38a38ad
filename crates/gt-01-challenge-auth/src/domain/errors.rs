//! # Verification Errors
//!
//! The closed rejection taxonomy. Each variant corresponds to exactly one
//! pipeline stage of [`ChallengeVerifier`](super::verifier::ChallengeVerifier).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a signature payload was rejected.
///
/// Serializes as the bare taxonomy name (e.g. `"ContentHashMismatch"`), which is
/// what the HTTP `reason` field carries.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// `challenge` is not a structurally valid challenge record
    #[error("Challenge is not valid JSON or is missing fields")]
    InvalidChallengeFormat,

    /// `challenge.action` is not the update-terms action
    #[error("Challenge action does not match the expected action")]
    InvalidAction,

    /// `challenge.address` differs from the authorized signer
    #[error("Challenge address does not match the authorized address")]
    ChallengeAddressMismatch,

    /// Timestamp older than the freshness window, or in the future
    #[error("Challenge has expired or is dated in the future")]
    ChallengeExpiredOrFuture,

    /// Authoritative content does not hash to `challenge.contentHash`
    #[error("Content hash does not match the challenge")]
    ContentHashMismatch,

    /// Decoded `signer` key differs from the authorized signer's key
    #[error("Signer public key does not match the authorized address")]
    SignerMismatch,

    /// `authenticatorData` does not commit to the claimed domain
    #[error("Authenticator data does not commit to the claimed domain")]
    DomainIntegrityFailure,

    /// Ed25519 verification over the signed message failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// A payload field could not be decoded
    #[error("Payload could not be decoded")]
    VerificationError,
}

impl RejectionReason {
    /// Taxonomy name of this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::InvalidChallengeFormat => "InvalidChallengeFormat",
            RejectionReason::InvalidAction => "InvalidAction",
            RejectionReason::ChallengeAddressMismatch => "ChallengeAddressMismatch",
            RejectionReason::ChallengeExpiredOrFuture => "ChallengeExpiredOrFuture",
            RejectionReason::ContentHashMismatch => "ContentHashMismatch",
            RejectionReason::SignerMismatch => "SignerMismatch",
            RejectionReason::DomainIntegrityFailure => "DomainIntegrityFailure",
            RejectionReason::SignatureVerificationFailed => "SignatureVerificationFailed",
            RejectionReason::VerificationError => "VerificationError",
        }
    }
}

/// Errors raised while building a challenge.
#[derive(Debug, Error)]
pub enum ChallengeError {
    /// Canonical serialization failed
    #[error("Failed to serialize challenge: {0}")]
    Serialize(#[from] serde_json::Error),
}
