//! # Adapters Layer
//!
//! Implementations of the outbound ports.

pub mod authority;
pub mod file_store;
pub mod memory_store;

pub use authority::StaticSignerAuthority;
pub use file_store::FileTermsStore;
pub use memory_store::InMemoryTermsStore;
