//! Middleware stack for the terms gateway.
//!
//! Layer order: Request → Tracing → CORS → BodyLimit → Handler

pub mod cors;
pub mod tracing;

pub use cors::create_cors_layer;
pub use tracing::TracingLayer;
