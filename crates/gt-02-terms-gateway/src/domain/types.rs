//! Request and response bodies of the terms API.

use gt_01_challenge_auth::SignaturePayload;
use serde::{Deserialize, Serialize};

/// `PUT /terms` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTermsRequest {
    /// Proposed terms content
    pub content: String,
    /// Address claiming to approve the update
    pub address: String,
    /// Signature payload over the update-terms challenge
    pub arc60: SignaturePayload,
}

/// `PUT /terms` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTermsResponse {
    pub success: bool,
}

/// `GET /terms` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsResponse {
    /// Current content, `None` until first approved
    pub content: Option<String>,
    /// Lowercase hex SHA-256 of `content`
    pub content_hash: Option<String>,
}

/// `POST /terms/challenge` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub address: String,
    pub content: String,
}

/// `POST /terms/challenge` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    /// Serialized challenge to hand to the signer verbatim
    pub challenge: String,
    pub content_hash: String,
}
