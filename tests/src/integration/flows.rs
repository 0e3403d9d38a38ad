//! # Integration Test Flows
//!
//! Drives gt-01-challenge-auth, gt-02-terms-gateway and gt-signer together:
//!
//! 1. **Gateway-issued challenge**: `POST /terms/challenge` → sign → `PUT /terms` → `GET /terms`
//! 2. **Offline challenge**: gt-signer builds and signs locally → `PUT /terms`
//! 3. **Persistence**: accepted content survives a gateway restart on a file store

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use gt_01_challenge_auth::{hash_content_hex, Arc60Signer};
    use gt_02_terms_gateway::{FileTermsStore, InMemoryTermsStore, TermsStore};
    use shared_crypto::Ed25519KeyPair;

    use crate::fixtures::{update_body, TestGateway, GOVERNANCE_DOMAIN, INITIAL_TERMS, NOW};

    const NEW_TERMS: &str = "# Terms of Service\n\nVersion 2: adds a dispute process.";

    // =============================================================================
    // GATEWAY-ISSUED CHALLENGE
    // =============================================================================

    #[tokio::test]
    async fn test_challenge_sign_put_get() {
        let gw = TestGateway::new();

        let challenge = gw.issue_challenge(NEW_TERMS).await;
        let body = update_body(&gw.admin, &gw.admin.address(), NEW_TERMS, &challenge);

        let (status, json) = gw.put_terms(&body).await;
        assert_eq!(status, StatusCode::OK, "update rejected: {json}");
        assert_eq!(json["success"], true);

        let terms = gw.get_terms().await;
        assert_eq!(terms["content"], NEW_TERMS);
        assert_eq!(terms["contentHash"], hash_content_hex(NEW_TERMS));
    }

    #[tokio::test]
    async fn test_signing_a_minute_after_issuance_is_accepted() {
        let gw = TestGateway::new();

        let challenge = gw.issue_challenge(NEW_TERMS).await;
        gw.clock.advance(60_000);
        let body = update_body(&gw.admin, &gw.admin.address(), NEW_TERMS, &challenge);

        let (status, _) = gw.put_terms(&body).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_successive_updates() {
        let gw = TestGateway::new();

        for version in 2..=4 {
            let content = format!("# Terms of Service\n\nVersion {version}.");
            let challenge = gw.issue_challenge(&content).await;
            let body = update_body(&gw.admin, &gw.admin.address(), &content, &challenge);

            let (status, _) = gw.put_terms(&body).await;
            assert_eq!(status, StatusCode::OK);
            gw.clock.advance(1_000);
        }

        assert_eq!(
            gw.stored_terms().await.as_deref(),
            Some("# Terms of Service\n\nVersion 4.")
        );
    }

    #[tokio::test]
    async fn test_unicode_content_round_trip() {
        let gw = TestGateway::new();
        let content = "Conditions générales ✓\n利用規約\n";

        let challenge = gw.issue_challenge(content).await;
        let body = update_body(&gw.admin, &gw.admin.address(), content, &challenge);

        let (status, _) = gw.put_terms(&body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(gw.get_terms().await["content"], content);
    }

    // =============================================================================
    // OFFLINE SIGNER
    // =============================================================================

    #[tokio::test]
    async fn test_offline_signer_update() {
        let gw = TestGateway::new();

        let update = gt_signer::build_update_at(&gw.admin, NEW_TERMS, NOW - 2_000).unwrap();
        let body = serde_json::to_value(&update).unwrap();

        let (status, _) = gw.put_terms(&body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(gw.stored_terms().await.as_deref(), Some(NEW_TERMS));
    }

    #[tokio::test]
    async fn test_signer_from_hex_seed_matches_gateway_admin() {
        let seed = "42".repeat(32);
        let admin = Arc60Signer::new(gt_signer::parse_seed(&seed).unwrap(), GOVERNANCE_DOMAIN);
        let gw = TestGateway::with_admin(admin, Arc::new(InMemoryTermsStore::new()));

        let signer = Arc60Signer::new(gt_signer::parse_seed(&seed).unwrap(), GOVERNANCE_DOMAIN);
        let update = gt_signer::build_update_at(&signer, NEW_TERMS, NOW).unwrap();

        let (status, _) = gw.put_terms(&serde_json::to_value(&update).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
    }

    // =============================================================================
    // PERSISTENCE
    // =============================================================================

    #[tokio::test]
    async fn test_empty_store_reports_no_terms() {
        let gw = TestGateway::with_store(Arc::new(InMemoryTermsStore::new()));

        let terms = gw.get_terms().await;
        assert!(terms["content"].is_null());
        assert!(terms["contentHash"].is_null());
    }

    #[tokio::test]
    async fn test_file_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.md");
        let seed = [7u8; 32];

        {
            let admin = Arc60Signer::new(Ed25519KeyPair::from_seed(seed), GOVERNANCE_DOMAIN);
            let gw = TestGateway::with_admin(admin, Arc::new(FileTermsStore::new(&path)));

            let challenge = gw.issue_challenge(NEW_TERMS).await;
            let body = update_body(&gw.admin, &gw.admin.address(), NEW_TERMS, &challenge);
            let (status, _) = gw.put_terms(&body).await;
            assert_eq!(status, StatusCode::OK);
        }

        let admin = Arc60Signer::new(Ed25519KeyPair::from_seed(seed), GOVERNANCE_DOMAIN);
        let restarted = TestGateway::with_admin(admin, Arc::new(FileTermsStore::new(&path)));
        assert_eq!(restarted.get_terms().await["content"], NEW_TERMS);
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_store_untouched() {
        let store = Arc::new(InMemoryTermsStore::with_content(INITIAL_TERMS));
        let gw = TestGateway::with_store(store.clone());

        let challenge = gw.issue_challenge(NEW_TERMS).await;
        let mut body = update_body(&gw.admin, &gw.admin.address(), NEW_TERMS, &challenge);
        body["content"] = "something else".into();

        let (status, _) = gw.put_terms(&body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(store.load().await.unwrap().as_deref(), Some(INITIAL_TERMS));
    }
}
