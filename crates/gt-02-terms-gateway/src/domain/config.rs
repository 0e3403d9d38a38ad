//! Gateway configuration with validation.
//!
//! Built from defaults, then an optional JSON file named by `GT_CONFIG`
//! (every section and field optional, durations as `"250ms"`, `"30s"` or
//! `"5m"`), then the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `GT_CONFIG` | path of the JSON file itself |
//! | `GT_HTTP_HOST` | `http.host` |
//! | `GT_HTTP_PORT` | `http.port` |
//! | `GT_ADMIN_ADDRESS` | `auth.admin_address` |
//! | `GT_MAX_CHALLENGE_AGE_SECS` | `auth.max_challenge_age` |
//! | `GT_TERMS_PATH` | `storage.terms_path` |
//! | `GT_MAX_BODY_BYTES` | `limits.max_body_bytes` |
//! | `GT_CORS_ORIGINS` | `cors.allowed_origins` (comma separated) |

use gt_01_challenge_auth::{VerifierConfig, MAX_CHALLENGE_AGE};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Signer authority and verifier policy
    pub auth: AuthConfig,
    /// Terms persistence
    pub storage: StorageConfig,
    /// Request limits
    pub limits: LimitsConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl GatewayConfig {
    /// Configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Configuration from `lookup` (an environment accessor): the `GT_CONFIG`
    /// file when set, otherwise defaults, with variable overrides on top.
    pub fn load<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("GT_CONFIG") {
            Some(path) => Self::from_file(path.trim())?,
            None => Self::default(),
        };
        config.apply_env(&lookup)?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::File(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| ConfigError::File(format!("{}: {}", path.display(), e)))
    }

    /// Apply overrides from `lookup` (an environment accessor).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GT_HTTP_HOST") {
            self.http.host = parse_var("GT_HTTP_HOST", &host)?;
        }
        if let Some(port) = lookup("GT_HTTP_PORT") {
            self.http.port = parse_var("GT_HTTP_PORT", &port)?;
        }
        if let Some(address) = lookup("GT_ADMIN_ADDRESS") {
            self.auth.admin_address = Some(address.trim().to_string());
        }
        if let Some(secs) = lookup("GT_MAX_CHALLENGE_AGE_SECS") {
            self.auth.max_challenge_age =
                Duration::from_secs(parse_var("GT_MAX_CHALLENGE_AGE_SECS", &secs)?);
        }
        if let Some(path) = lookup("GT_TERMS_PATH") {
            self.storage.terms_path = Some(PathBuf::from(path));
        }
        if let Some(bytes) = lookup("GT_MAX_BODY_BYTES") {
            self.limits.max_body_bytes = parse_var("GT_MAX_BODY_BYTES", &bytes)?;
        }
        if let Some(origins) = lookup("GT_CORS_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let admin = self
            .auth
            .admin_address
            .as_deref()
            .ok_or(ConfigError::MissingAdminAddress)?;

        shared_crypto::decode_address(admin)
            .map_err(|e| ConfigError::InvalidAdminAddress(e.to_string()))?;

        if self.auth.max_challenge_age.is_zero() {
            return Err(ConfigError::Invalid(
                "max_challenge_age cannot be 0".into(),
            ));
        }

        if self.limits.max_body_bytes == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_body_bytes cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Verifier policy derived from this configuration
    pub fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig {
            max_challenge_age: self.auth.max_challenge_age,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8787)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8787,
        }
    }
}

/// Authorization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Address authorized to approve terms updates (required)
    pub admin_address: Option<String>,
    /// Oldest accepted challenge age
    #[serde(with = "humantime_serde")]
    pub max_challenge_age: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_address: None,
            max_challenge_age: MAX_CHALLENGE_AGE,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File holding the approved terms; in-memory when unset
    pub terms_path: Option<PathBuf>,
}

/// Request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Max request body size in bytes (default: 1MB)
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Max age for preflight cache in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            max_age: 86400, // 24 hours
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No authority address configured
    #[error("admin address is not configured (set GT_ADMIN_ADDRESS)")]
    MissingAdminAddress,
    /// Authority address does not decode
    #[error("invalid admin address: {0}")]
    InvalidAdminAddress(String),
    /// Configuration file missing or malformed
    #[error("cannot load config file {0}")]
    File(String),
    /// Environment variable could not be parsed
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    /// Invalid size or count limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    /// General configuration error
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn parse_var<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: value.to_string(),
    })
}

/// Humantime serde module for Duration serialization
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    /// Coarsest unit that represents `duration` exactly.
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = if duration.subsec_nanos() == 0 {
            format!("{}s", duration.as_secs())
        } else if duration.subsec_nanos() % 1_000_000 == 0 {
            format!("{}ms", duration.as_millis())
        } else {
            format!("{}ns", duration.as_nanos())
        };
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse_duration(s: &str) -> Result<Duration, &'static str> {
        let s = s.trim();
        if let Some(ns) = s.strip_suffix("ns") {
            ns.trim()
                .parse::<u64>()
                .map(Duration::from_nanos)
                .map_err(|_| "invalid nanoseconds")
        } else if let Some(ms) = s.strip_suffix("ms") {
            ms.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| "invalid milliseconds")
        } else if let Some(secs) = s.strip_suffix('s') {
            secs.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid seconds")
        } else if let Some(mins) = s.strip_suffix('m') {
            mins.trim()
                .parse::<u64>()
                .map(|m| Duration::from_secs(m * 60))
                .map_err(|_| "invalid minutes")
        } else {
            // Plain seconds
            s.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid duration format")
        }
    }
}
