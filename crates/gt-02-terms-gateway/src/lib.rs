//! GT-02 Terms Gateway - HTTP surface for governance terms-of-service updates.
//!
//! Reads are public. Writes carry a challenge signed by the authorized admin
//! and are persisted only after the challenge auth subsystem accepts them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  TERMS GATEWAY (gt-02)                   │
//! ├──────────────────────────────────────────────────────────┤
//! │   GET /terms   PUT /terms   POST /terms/challenge        │
//! │        │            │               │                    │
//! │  ┌─────┴────────────┴───────────────┴─────┐              │
//! │  │  Tracing → CORS → BodyLimit            │              │
//! │  └─────┬────────────┬───────────────┬─────┘              │
//! │        │            │               │                    │
//! │   TermsStore   ChallengeAuthApi  SignerAuthority         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use gt_02_terms_gateway::{GatewayConfig, TermsGatewayService};
//!
//! let config = GatewayConfig::from_env()?;
//! let service = TermsGatewayService::new(config)?;
//! service.serve(shutdown_signal()).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod middleware;
pub mod ports;
pub mod router;
pub mod service;

pub use adapters::{FileTermsStore, InMemoryTermsStore, StaticSignerAuthority};
pub use domain::config::{
    AuthConfig, ConfigError, CorsConfig, GatewayConfig, HttpConfig, LimitsConfig, StorageConfig,
};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use domain::types::{
    ChallengeRequest, ChallengeResponse, TermsResponse, UpdateTermsRequest, UpdateTermsResponse,
};
pub use ports::outbound::{AuthorityError, SignerAuthority, StoreError, TermsStore};
pub use router::{build_router, AppState};
pub use service::{store_from_config, TermsGatewayService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
