//! In-process terms gateway for cross-crate tests.
//!
//! The gateway runs against a [`FixedClock`] so tests control how old a
//! challenge is when it reaches the verifier.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use gt_01_challenge_auth::{Arc60Signer, ChallengeAuthService, FixedClock};
use gt_02_terms_gateway::{
    GatewayConfig, InMemoryTermsStore, StaticSignerAuthority, TermsGatewayService, TermsStore,
};
use serde_json::Value;
use shared_crypto::Ed25519KeyPair;
use tower::ServiceExt;

/// 2023-11-14T22:13:20Z
pub const NOW: i64 = 1_700_000_000_000;

/// Domain the admin's wallet signs for.
pub const GOVERNANCE_DOMAIN: &str = "governance.example.org";

pub const INITIAL_TERMS: &str = "# Terms of Service\n\nVersion 1.";

/// Gateway plus the handles a test needs to drive it.
pub struct TestGateway {
    pub service: TermsGatewayService,
    pub clock: Arc<FixedClock>,
    pub store: Arc<dyn TermsStore>,
    pub admin: Arc60Signer,
}

impl TestGateway {
    /// Gateway with in-memory terms and a freshly generated admin key.
    pub fn new() -> Self {
        let store: Arc<dyn TermsStore> = Arc::new(InMemoryTermsStore::with_content(INITIAL_TERMS));
        Self::with_store(store)
    }

    pub fn with_store(store: Arc<dyn TermsStore>) -> Self {
        Self::with_admin(
            Arc60Signer::new(Ed25519KeyPair::generate(), GOVERNANCE_DOMAIN),
            store,
        )
    }

    /// Gateway whose admin key derives from `seed`.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::with_admin(
            Arc60Signer::new(Ed25519KeyPair::from_seed(seed), GOVERNANCE_DOMAIN),
            Arc::new(InMemoryTermsStore::with_content(INITIAL_TERMS)),
        )
    }

    pub fn with_admin(admin: Arc60Signer, store: Arc<dyn TermsStore>) -> Self {
        let clock = Arc::new(FixedClock::new(NOW));

        let mut config = GatewayConfig::default();
        config.auth.admin_address = Some(admin.address());

        let service = TermsGatewayService::with_components(
            config.clone(),
            Arc::new(ChallengeAuthService::with_config(
                config.verifier_config(),
                clock.clone(),
            )),
            store.clone(),
            Arc::new(StaticSignerAuthority::new(admin.address())),
        );

        Self {
            service,
            clock,
            store,
            admin,
        }
    }

    pub fn router(&self) -> Router {
        self.service.router()
    }

    /// Send a JSON request and return status plus parsed body.
    pub async fn send(&self, method: Method, uri: &str, body: &Value) -> (StatusCode, Value) {
        let body = if body.is_null() {
            Body::empty()
        } else {
            Body::from(body.to_string())
        };
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .expect("valid request");

        let response = self
            .router()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn put_terms(&self, body: &Value) -> (StatusCode, Value) {
        self.send(Method::PUT, "/terms", body).await
    }

    pub async fn get_terms(&self) -> Value {
        let (status, json) = self.send(Method::GET, "/terms", &Value::Null).await;
        assert_eq!(status, StatusCode::OK);
        json
    }

    /// Ask the gateway for a challenge over `content` on behalf of the admin.
    pub async fn issue_challenge(&self, content: &str) -> String {
        let request = serde_json::json!({
            "address": self.admin.address(),
            "content": content,
        });
        let (status, json) = self.send(Method::POST, "/terms/challenge", &request).await;
        assert_eq!(status, StatusCode::OK, "challenge request failed: {json}");
        json["challenge"]
            .as_str()
            .expect("challenge string")
            .to_string()
    }

    pub async fn stored_terms(&self) -> Option<String> {
        self.store.load().await.expect("store readable")
    }
}

impl Default for TestGateway {
    fn default() -> Self {
        Self::new()
    }
}

/// `PUT /terms` body signed by `signer` over `challenge`.
pub fn update_body(signer: &Arc60Signer, address: &str, content: &str, challenge: &str) -> Value {
    serde_json::json!({
        "content": content,
        "address": address,
        "arc60": signer.sign_challenge(challenge),
    })
}
