//! Cross-crate flows: challenge issuance, external signing, gateway update.

pub mod flows;
