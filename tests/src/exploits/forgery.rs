//! # Forgery Attacks
//!
//! An attacker without the admin key, or with the admin's signature but a
//! tampered payload, tries to get terms accepted.

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use gt_01_challenge_auth::{build_challenge_at, hash_content_hex, Arc60Signer};
    use shared_crypto::{decode_address, sha256, Ed25519KeyPair};

    use crate::fixtures::{update_body, TestGateway, GOVERNANCE_DOMAIN, INITIAL_TERMS, NOW};

    const ADMIN_SEED: [u8; 32] = [0x5a; 32];
    const LOOKALIKE_DOMAIN: &str = "governance.examp1e.org";

    const PROPOSED: &str = "Proposed terms v2";

    async fn assert_rejected(gw: &TestGateway, body: &serde_json::Value, reason: &str) {
        let (status, json) = gw.put_terms(body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "expected rejection: {json}");
        assert_eq!(json["reason"], reason);
        assert_eq!(gw.stored_terms().await.as_deref(), Some(INITIAL_TERMS));
    }

    fn attacker() -> Arc60Signer {
        Arc60Signer::new(Ed25519KeyPair::generate(), GOVERNANCE_DOMAIN)
    }

    // =============================================================================
    // IDENTITY
    // =============================================================================

    #[tokio::test]
    async fn test_attacker_signs_challenge_naming_admin() {
        let gw = TestGateway::new();
        let challenge = gw.issue_challenge(PROPOSED).await;
        let body = update_body(&attacker(), &gw.admin.address(), PROPOSED, &challenge);

        assert_rejected(&gw, &body, "SignerMismatch").await;
    }

    #[tokio::test]
    async fn test_attacker_claims_own_address() {
        let gw = TestGateway::new();
        let attacker = attacker();
        let challenge =
            build_challenge_at(&attacker.address(), &hash_content_hex(PROPOSED), NOW).unwrap();
        let body = update_body(&attacker, &attacker.address(), PROPOSED, &challenge);

        let (status, _) = gw.put_terms(&body).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(gw.stored_terms().await.as_deref(), Some(INITIAL_TERMS));
    }

    #[tokio::test]
    async fn test_attacker_signs_but_presents_admin_key() {
        // Signer field swapped to the admin key, signature still the attacker's
        let gw = TestGateway::new();
        let challenge = gw.issue_challenge(PROPOSED).await;
        let mut body = update_body(&attacker(), &gw.admin.address(), PROPOSED, &challenge);
        let admin_key = decode_address(&gw.admin.address()).unwrap();
        body["arc60"]["signer"] = STANDARD.encode(admin_key).into();

        assert_rejected(&gw, &body, "SignatureVerificationFailed").await;
    }

    // =============================================================================
    // DOMAIN
    // =============================================================================

    #[tokio::test]
    async fn test_phishing_domain_relabelled() {
        // Signature solicited on a lookalike origin, relayed claiming the real one
        let gw = TestGateway::with_seed(ADMIN_SEED);
        let phished = Arc60Signer::new(Ed25519KeyPair::from_seed(ADMIN_SEED), LOOKALIKE_DOMAIN);
        let challenge = gw.issue_challenge(PROPOSED).await;
        let mut body = update_body(&phished, &gw.admin.address(), PROPOSED, &challenge);
        body["arc60"]["domain"] = GOVERNANCE_DOMAIN.into();

        assert_rejected(&gw, &body, "DomainIntegrityFailure").await;
    }

    #[tokio::test]
    async fn test_authenticator_data_rewritten_to_match_domain() {
        let gw = TestGateway::with_seed(ADMIN_SEED);
        let phished = Arc60Signer::new(Ed25519KeyPair::from_seed(ADMIN_SEED), LOOKALIKE_DOMAIN);
        let challenge = gw.issue_challenge(PROPOSED).await;
        let mut body = update_body(&phished, &gw.admin.address(), PROPOSED, &challenge);
        body["arc60"]["domain"] = GOVERNANCE_DOMAIN.into();
        body["arc60"]["authenticatorData"] =
            STANDARD.encode(sha256(GOVERNANCE_DOMAIN.as_bytes())).into();

        assert_rejected(&gw, &body, "SignatureVerificationFailed").await;
    }

    #[tokio::test]
    async fn test_truncated_authenticator_data() {
        let gw = TestGateway::new();
        let challenge = gw.issue_challenge(PROPOSED).await;
        let mut body = update_body(&gw.admin, &gw.admin.address(), PROPOSED, &challenge);
        body["arc60"]["authenticatorData"] = STANDARD.encode([0u8; 16]).into();

        assert_rejected(&gw, &body, "DomainIntegrityFailure").await;
    }

    // =============================================================================
    // PAYLOAD TAMPERING
    // =============================================================================

    #[tokio::test]
    async fn test_flipped_signature_bit() {
        let gw = TestGateway::new();
        let challenge = gw.issue_challenge(PROPOSED).await;
        let mut body = update_body(&gw.admin, &gw.admin.address(), PROPOSED, &challenge);

        let mut sig = STANDARD
            .decode(body["arc60"]["signature"].as_str().unwrap())
            .unwrap();
        sig[10] ^= 0x01;
        body["arc60"]["signature"] = STANDARD.encode(&sig).into();

        assert_rejected(&gw, &body, "SignatureVerificationFailed").await;
    }

    #[tokio::test]
    async fn test_reserialized_challenge() {
        // Semantically equal JSON, different bytes than were signed
        let gw = TestGateway::new();
        let challenge = gw.issue_challenge(PROPOSED).await;
        let mut body = update_body(&gw.admin, &gw.admin.address(), PROPOSED, &challenge);

        let parsed: serde_json::Value = serde_json::from_str(&challenge).unwrap();
        body["arc60"]["challenge"] = serde_json::to_string_pretty(&parsed).unwrap().into();

        assert_rejected(&gw, &body, "SignatureVerificationFailed").await;
    }

    #[tokio::test]
    async fn test_wrong_action() {
        let gw = TestGateway::new();
        let challenge = gw
            .issue_challenge(PROPOSED)
            .await
            .replace("update-terms", "transfer-funds");
        let body = update_body(&gw.admin, &gw.admin.address(), PROPOSED, &challenge);

        assert_rejected(&gw, &body, "InvalidAction").await;
    }

    #[tokio::test]
    async fn test_garbage_challenge() {
        let gw = TestGateway::new();
        let body = update_body(&gw.admin, &gw.admin.address(), PROPOSED, "please sign me");

        assert_rejected(&gw, &body, "InvalidChallengeFormat").await;
    }

    #[tokio::test]
    async fn test_non_base64_signer() {
        let gw = TestGateway::new();
        let challenge = gw.issue_challenge(PROPOSED).await;
        let mut body = update_body(&gw.admin, &gw.admin.address(), PROPOSED, &challenge);
        body["arc60"]["signer"] = "!!not base64!!".into();

        assert_rejected(&gw, &body, "VerificationError").await;
    }

    #[tokio::test]
    async fn test_missing_payload_field_is_bad_request() {
        let gw = TestGateway::new();
        let challenge = gw.issue_challenge(PROPOSED).await;
        let mut body = update_body(&gw.admin, &gw.admin.address(), PROPOSED, &challenge);
        body["arc60"]
            .as_object_mut()
            .unwrap()
            .remove("authenticatorData");

        let (status, _) = gw.put_terms(&body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(gw.stored_terms().await.as_deref(), Some(INITIAL_TERMS));
    }
}
