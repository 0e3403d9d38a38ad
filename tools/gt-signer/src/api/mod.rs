//! Terms gateway HTTP client.

pub mod client;

pub use client::{ApiError, GatewayClient};
