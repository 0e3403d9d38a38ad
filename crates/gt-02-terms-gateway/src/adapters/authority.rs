//! Authority backed by a configured address.

use crate::ports::outbound::{AuthorityError, SignerAuthority};

/// Always names the same signer.
#[derive(Debug, Clone)]
pub struct StaticSignerAuthority {
    address: Option<String>,
}

impl StaticSignerAuthority {
    /// Authority naming `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    /// Authority with no signer; every lookup fails.
    pub fn unconfigured() -> Self {
        Self { address: None }
    }
}

#[async_trait::async_trait]
impl SignerAuthority for StaticSignerAuthority {
    async fn expected_signer(&self) -> Result<String, AuthorityError> {
        self.address.clone().ok_or(AuthorityError::NotConfigured)
    }
}
