//! # Challenge Auth Subsystem (GT-01)
//!
//! Domain-bound, replay-resistant challenge-response verification that
//! authorizes a governance terms update without an on-chain transaction.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Challenge building and the verification pipeline, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): Clock implementations
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Flow
//!
//! ```text
//! build_challenge ──► external signer ──► SignaturePayload ──► verify ──► Accepted / Rejected{reason}
//! ```
//!
//! ## Security Notes
//!
//! - **Content binding**: the challenge carries SHA-256 of the exact content
//! - **Domain binding**: `authenticatorData` starts with SHA-256(domain) and is signed over
//! - **Freshness**: challenges older than five minutes, or dated in the future, are rejected
//! - **Identity binding**: challenge address and signer key are checked against the
//!   caller's authority independently

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{FixedClock, SystemClock};
pub use domain::challenge::{
    build_challenge, build_challenge_at, hash_content_hex, Challenge, DOMAIN_HASH_LEN,
    MAX_CHALLENGE_AGE, UPDATE_TERMS_ACTION,
};
pub use domain::entities::{SignaturePayload, VerificationResult, VerifierConfig};
pub use domain::errors::{ChallengeError, RejectionReason};
pub use domain::signer::Arc60Signer;
pub use domain::verifier::{signing_message, ChallengeVerifier};
pub use ports::inbound::ChallengeAuthApi;
pub use ports::outbound::Clock;
pub use service::ChallengeAuthService;
