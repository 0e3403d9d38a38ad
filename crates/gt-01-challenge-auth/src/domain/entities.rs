//! # Domain Entities
//!
//! The submitted signature payload, the verification outcome, and verifier
//! configuration.

use super::challenge::MAX_CHALLENGE_AGE;
use super::errors::RejectionReason;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Artifact produced by an external signer.
///
/// Binary fields are standard base64. `challenge` is the serialized challenge
/// string, carried verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignaturePayload {
    /// Serialized challenge, exactly as built
    pub challenge: String,
    /// Base64 Ed25519 signature over `SHA-256(challenge) || authenticatorData`
    pub signature: String,
    /// Base64 raw public key of the signer
    pub signer: String,
    /// Origin that solicited the signature
    pub domain: String,
    /// Base64 authenticator data; first 32 bytes are `SHA-256(domain)`
    pub authenticator_data: String,
}

/// Outcome of verifying a [`SignaturePayload`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationResult {
    /// Every binding holds
    Accepted,
    /// The first failing stage
    Rejected {
        /// Taxonomy entry of the failing stage
        reason: RejectionReason,
    },
}

impl VerificationResult {
    /// Create a rejected result.
    pub fn rejected(reason: RejectionReason) -> Self {
        VerificationResult::Rejected { reason }
    }

    /// Whether the payload was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, VerificationResult::Accepted)
    }

    /// Rejection reason, if any.
    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            VerificationResult::Accepted => None,
            VerificationResult::Rejected { reason } => Some(*reason),
        }
    }

    /// Convert into a `Result` for `?` propagation.
    pub fn into_result(self) -> Result<(), RejectionReason> {
        match self {
            VerificationResult::Accepted => Ok(()),
            VerificationResult::Rejected { reason } => Err(reason),
        }
    }
}

impl From<Result<(), RejectionReason>> for VerificationResult {
    fn from(result: Result<(), RejectionReason>) -> Self {
        match result {
            Ok(()) => VerificationResult::Accepted,
            Err(reason) => VerificationResult::Rejected { reason },
        }
    }
}

/// Verifier policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Oldest accepted challenge age (inclusive)
    pub max_challenge_age: Duration,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_challenge_age: MAX_CHALLENGE_AGE,
        }
    }
}
