//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies this subsystem needs from its environment.

/// Wall-clock source.
///
/// The only side effect of building or verifying a challenge is reading the
/// time; abstracting it keeps the freshness window testable.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}
