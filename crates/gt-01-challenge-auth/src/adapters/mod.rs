//! # Adapters Layer
//!
//! Concrete implementations of outbound ports.

pub mod clock;

pub use clock::{FixedClock, SystemClock};
