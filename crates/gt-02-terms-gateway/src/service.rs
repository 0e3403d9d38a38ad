//! Terms gateway service: wires configuration, adapters and the challenge
//! verifier into a running HTTP server.

use crate::adapters::{FileTermsStore, InMemoryTermsStore, StaticSignerAuthority};
use crate::domain::config::{ConfigError, GatewayConfig};
use crate::domain::error::GatewayError;
use crate::ports::outbound::{SignerAuthority, TermsStore};
use crate::router::{build_router, AppState};
use axum::Router;
use gt_01_challenge_auth::{ChallengeAuthApi, ChallengeAuthService, SystemClock};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Terms gateway service state
pub struct TermsGatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl TermsGatewayService {
    /// Create the service from configuration.
    ///
    /// The authorized signer is the configured admin address and the store is
    /// chosen by [`store_from_config`].
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;

        let admin = config
            .auth
            .admin_address
            .clone()
            .ok_or(ConfigError::MissingAdminAddress)?;

        let auth = Arc::new(ChallengeAuthService::with_config(
            config.verifier_config(),
            SystemClock,
        ));
        let store = store_from_config(&config);
        let authority = Arc::new(StaticSignerAuthority::new(admin));

        Ok(Self::with_components(config, auth, store, authority))
    }

    /// Create the service from explicit components.
    pub fn with_components(
        config: GatewayConfig,
        auth: Arc<dyn ChallengeAuthApi>,
        store: Arc<dyn TermsStore>,
        authority: Arc<dyn SignerAuthority>,
    ) -> Self {
        Self {
            config,
            state: AppState {
                auth,
                store,
                authority,
            },
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Router with the full middleware stack.
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn serve<F>(&self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr).await.map_err(GatewayError::Bind)?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr().map_err(GatewayError::Bind)?;
        info!(addr = %local, "Terms gateway listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(GatewayError::Serve)?;

        info!("Terms gateway stopped");
        Ok(())
    }
}

/// File-backed store when a path is configured, in-memory otherwise.
pub fn store_from_config(config: &GatewayConfig) -> Arc<dyn TermsStore> {
    match &config.storage.terms_path {
        Some(path) => {
            info!(path = %path.display(), "Persisting terms to file");
            Arc::new(FileTermsStore::new(path.clone()))
        }
        None => {
            info!("No terms path configured, terms are kept in memory");
            Arc::new(InMemoryTermsStore::new())
        }
    }
}
