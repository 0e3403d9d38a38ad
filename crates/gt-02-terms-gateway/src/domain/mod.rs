//! Gateway domain: configuration, wire types, and errors.

pub mod config;
pub mod error;
pub mod types;
