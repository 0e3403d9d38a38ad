//! GT-Signer: signs governance terms updates for the terms gateway.
//!
//! ```text
//! content ──► POST /terms/challenge ──► sign (seed, domain) ──► PUT /terms
//! ```
//!
//! The signer holds a raw Ed25519 seed and plays the role of an
//! ARC-60 wallet: it prefixes `authenticatorData` with SHA-256 of the
//! domain it was told it is signing for.

pub mod api;
pub mod keys;
pub mod update;

pub use api::{ApiError, GatewayClient};
pub use keys::{parse_seed, KeyError};
pub use update::{build_update, build_update_at};
