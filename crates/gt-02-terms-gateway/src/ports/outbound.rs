//! # Outbound Ports (Driven Ports / SPI)
//!
//! Durable storage for approved terms, and the authority that names who may
//! approve them.

use thiserror::Error;

/// Error from terms persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes are not valid UTF-8
    #[error("Stored terms are not valid UTF-8")]
    Corrupt,
}

/// Error resolving the authorized signer.
#[derive(Debug, Error)]
pub enum AuthorityError {
    /// The authority has no signer configured
    #[error("No authorized signer is configured")]
    NotConfigured,

    /// The authority could not be reached
    #[error("Authority unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage for the current terms content.
#[async_trait::async_trait]
pub trait TermsStore: Send + Sync {
    /// Current terms, `None` if none have been approved yet.
    async fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the current terms.
    ///
    /// Only called after a challenge response over exactly `content` was accepted.
    async fn save(&self, content: &str) -> Result<(), StoreError>;
}

/// Source of the address authorized to approve terms updates.
#[async_trait::async_trait]
pub trait SignerAuthority: Send + Sync {
    /// Address whose signature is required.
    async fn expected_signer(&self) -> Result<String, AuthorityError>;
}
