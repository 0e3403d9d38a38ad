//! # Domain Layer
//!
//! Pure challenge and verification logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod challenge;
pub mod entities;
pub mod errors;
pub mod signer;
pub mod verifier;
