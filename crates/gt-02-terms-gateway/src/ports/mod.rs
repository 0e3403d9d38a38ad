//! # Ports Layer
//!
//! Collaborators the gateway depends on but does not own.

pub mod outbound;

pub use outbound::{AuthorityError, SignerAuthority, StoreError, TermsStore};
