//! # Challenge Auth Service
//!
//! Application service layer that implements the `ChallengeAuthApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`ChallengeAuthApi`)
//! - Uses the outbound port (`Clock`) for challenge timestamps and freshness
//! - Delegates hashing and verification to the domain layer

use crate::domain::challenge::{self, build_challenge_at};
use crate::domain::entities::{SignaturePayload, VerificationResult, VerifierConfig};
use crate::domain::errors::ChallengeError;
use crate::domain::verifier::ChallengeVerifier;
use crate::ports::inbound::ChallengeAuthApi;
use crate::ports::outbound::Clock;
use tracing::{debug, info, warn};

/// Challenge Auth Service.
///
/// Cheap to call from request handlers: one hash of the content, one hash of
/// the challenge, one Ed25519 verification.
pub struct ChallengeAuthService<C: Clock> {
    verifier: ChallengeVerifier,
    clock: C,
}

impl<C: Clock> ChallengeAuthService<C> {
    /// Create a service with the default five-minute window.
    pub fn new(clock: C) -> Self {
        Self::with_config(VerifierConfig::default(), clock)
    }

    /// Create a service with explicit verifier policy.
    pub fn with_config(config: VerifierConfig, clock: C) -> Self {
        Self {
            verifier: ChallengeVerifier::with_config(config),
            clock,
        }
    }

    /// Verifier policy in effect.
    pub fn config(&self) -> &VerifierConfig {
        self.verifier.config()
    }
}

impl<C: Clock> ChallengeAuthApi for ChallengeAuthService<C> {
    fn hash_content_hex(&self, content: &str) -> String {
        challenge::hash_content_hex(content)
    }

    fn build_challenge(
        &self,
        address: &str,
        content_hash: &str,
    ) -> Result<String, ChallengeError> {
        let challenge = build_challenge_at(address, content_hash, self.clock.now_ms())?;
        debug!(%address, %content_hash, "Built update-terms challenge");
        Ok(challenge)
    }

    fn verify_challenge_response(
        &self,
        payload: &SignaturePayload,
        expected_address: &str,
        authoritative_content: &str,
    ) -> VerificationResult {
        let result = self.verifier.verify_at(
            payload,
            expected_address,
            authoritative_content,
            self.clock.now_ms(),
        );

        match result {
            VerificationResult::Accepted => {
                info!(
                    signer = %expected_address,
                    domain = %payload.domain,
                    "Challenge response accepted"
                );
            }
            VerificationResult::Rejected { reason } => {
                warn!(
                    signer = %expected_address,
                    domain = %payload.domain,
                    reason = reason.as_str(),
                    "Challenge response rejected"
                );
            }
        }

        result
    }
}
