//! # Signature Verifier
//!
//! Strict, ordered pipeline over a [`SignaturePayload`]. Each stage either
//! advances or returns its rejection reason; later stages never run after a
//! failure.
//!
//! 1. Parse challenge -> `InvalidChallengeFormat`
//! 2. Action -> `InvalidAction`
//! 3. Challenge address == expected address -> `ChallengeAddressMismatch`
//! 4. Freshness, `0 <= age <= max` -> `ChallengeExpiredOrFuture`
//! 5. Content hash -> `ContentHashMismatch`
//! 6. Signer key == key of expected address -> `SignerMismatch`
//! 7. `authenticatorData[..32] == SHA-256(domain)` -> `DomainIntegrityFailure`
//! 8. Ed25519 over `SHA-256(challenge) || authenticatorData` -> `SignatureVerificationFailed`
//!
//! Binary fields are base64-decoded lazily by the stage that needs them.
//!
//! ## Security Notes
//!
//! - Stages 3 and 6 are both required. `challenge.address` is attacker-supplied
//!   and is checked against the caller's authority; the signer key is checked
//!   against that same authority independently.
//! - Digest and key comparisons use `subtle` constant-time equality.

use super::challenge::{hash_content_hex, Challenge, DOMAIN_HASH_LEN, UPDATE_TERMS_ACTION};
use super::entities::{SignaturePayload, VerificationResult, VerifierConfig};
use super::errors::RejectionReason;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use shared_crypto::{decode_address, sha256, Ed25519PublicKey, Ed25519Signature};
use subtle::ConstantTimeEq;

/// Message covered by the signature: `SHA-256(challenge) || authenticator_data`.
pub fn signing_message(challenge: &str, authenticator_data: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(DOMAIN_HASH_LEN + authenticator_data.len());
    message.extend_from_slice(&sha256(challenge.as_bytes()));
    message.extend_from_slice(authenticator_data);
    message
}

/// Challenge-response verifier.
#[derive(Debug, Clone, Default)]
pub struct ChallengeVerifier {
    config: VerifierConfig,
}

impl ChallengeVerifier {
    /// Create a verifier with the default five-minute window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a verifier with explicit policy.
    pub fn with_config(config: VerifierConfig) -> Self {
        Self { config }
    }

    /// Active policy.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify `payload` against the authorized address and content at `now_ms`.
    pub fn verify_at(
        &self,
        payload: &SignaturePayload,
        expected_address: &str,
        authoritative_content: &str,
        now_ms: i64,
    ) -> VerificationResult {
        self.run_pipeline(payload, expected_address, authoritative_content, now_ms)
            .into()
    }

    fn run_pipeline(
        &self,
        payload: &SignaturePayload,
        expected_address: &str,
        authoritative_content: &str,
        now_ms: i64,
    ) -> Result<(), RejectionReason> {
        let challenge = Challenge::parse(&payload.challenge)
            .map_err(|_| RejectionReason::InvalidChallengeFormat)?;

        if challenge.action != UPDATE_TERMS_ACTION {
            return Err(RejectionReason::InvalidAction);
        }

        if challenge.address != expected_address {
            return Err(RejectionReason::ChallengeAddressMismatch);
        }

        self.check_freshness(challenge.timestamp, now_ms)?;

        let content_hash = hash_content_hex(authoritative_content);
        if !bool::from(content_hash.as_bytes().ct_eq(challenge.content_hash.as_bytes())) {
            return Err(RejectionReason::ContentHashMismatch);
        }

        let signer = check_signer(payload, expected_address)?;

        let authenticator_data = decode_field(&payload.authenticator_data)?;
        check_domain(&payload.domain, &authenticator_data)?;

        check_signature(payload, &signer, &authenticator_data)
    }

    fn check_freshness(&self, timestamp: i64, now_ms: i64) -> Result<(), RejectionReason> {
        let max_age_ms =
            i64::try_from(self.config.max_challenge_age.as_millis()).unwrap_or(i64::MAX);
        let age = now_ms.saturating_sub(timestamp);

        if age < 0 || age > max_age_ms {
            return Err(RejectionReason::ChallengeExpiredOrFuture);
        }
        Ok(())
    }
}

fn decode_field(value: &str) -> Result<Vec<u8>, RejectionReason> {
    BASE64
        .decode(value)
        .map_err(|_| RejectionReason::VerificationError)
}

/// Compare the decoded signer key to the key behind the authorized address.
fn check_signer(
    payload: &SignaturePayload,
    expected_address: &str,
) -> Result<Vec<u8>, RejectionReason> {
    let expected_key =
        decode_address(expected_address).map_err(|_| RejectionReason::VerificationError)?;
    let signer = decode_field(&payload.signer)?;

    if !bool::from(expected_key.as_slice().ct_eq(signer.as_slice())) {
        return Err(RejectionReason::SignerMismatch);
    }
    Ok(signer)
}

fn check_domain(domain: &str, authenticator_data: &[u8]) -> Result<(), RejectionReason> {
    let Some(prefix) = authenticator_data.get(..DOMAIN_HASH_LEN) else {
        return Err(RejectionReason::DomainIntegrityFailure);
    };

    if !bool::from(sha256(domain.as_bytes()).as_slice().ct_eq(prefix)) {
        return Err(RejectionReason::DomainIntegrityFailure);
    }
    Ok(())
}

fn check_signature(
    payload: &SignaturePayload,
    signer: &[u8],
    authenticator_data: &[u8],
) -> Result<(), RejectionReason> {
    let signature = BASE64
        .decode(&payload.signature)
        .ok()
        .and_then(|bytes| Ed25519Signature::from_slice(&bytes).ok())
        .ok_or(RejectionReason::SignatureVerificationFailed)?;
    let public_key = Ed25519PublicKey::from_slice(signer)
        .map_err(|_| RejectionReason::SignatureVerificationFailed)?;

    public_key
        .verify(
            &signing_message(&payload.challenge, authenticator_data),
            &signature,
        )
        .map_err(|_| RejectionReason::SignatureVerificationFailed)
}
