//! Client for the terms gateway REST API.

use std::time::Duration;

use gt_02_terms_gateway::{
    ChallengeRequest, ChallengeResponse, TermsResponse, UpdateTermsRequest, UpdateTermsResponse,
};
use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the gateway.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gateway rejected the request ({status}): {message}")]
    Rejected {
        status: u16,
        message: String,
        reason: Option<String>,
    },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Connection failed: {0}")]
    Connection(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    reason: Option<String>,
}

/// Terms gateway client.
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a new client for the gateway at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn connect_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(format!("Cannot connect to {}", self.base_url))
        } else {
            ApiError::Http(e)
        }
    }

    /// Current terms.
    pub async fn fetch_terms(&self) -> Result<TermsResponse, ApiError> {
        let response = self
            .client
            .get(self.url("/terms"))
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;
        decode(response).await
    }

    /// Ask the gateway for a challenge over `content`.
    pub async fn request_challenge(
        &self,
        address: &str,
        content: &str,
    ) -> Result<ChallengeResponse, ApiError> {
        let request = ChallengeRequest {
            address: address.to_string(),
            content: content.to_string(),
        };
        let response = self
            .client
            .post(self.url("/terms/challenge"))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;
        decode(response).await
    }

    /// Submit a signed update.
    pub async fn submit_update(
        &self,
        update: &UpdateTermsRequest,
    ) -> Result<UpdateTermsResponse, ApiError> {
        let response = self
            .client
            .put(self.url("/terms"))
            .json(update)
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;
        decode(response).await
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) => ApiError::Rejected {
                status: status.as_u16(),
                message: err.error,
                reason: err.reason,
            },
            Err(_) => ApiError::Rejected {
                status: status.as_u16(),
                message: body,
                reason: None,
            },
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}
