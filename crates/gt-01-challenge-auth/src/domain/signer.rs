//! # Reference Signer
//!
//! Produces a [`SignaturePayload`] the way a compliant external wallet does:
//! `authenticatorData = SHA-256(domain) || extension` and the Ed25519
//! signature covers `SHA-256(challenge) || authenticatorData`.

use super::entities::SignaturePayload;
use super::verifier::signing_message;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use shared_crypto::{sha256, Ed25519KeyPair};

/// Signs challenges under a fixed domain.
pub struct Arc60Signer {
    keypair: Ed25519KeyPair,
    domain: String,
    extension: Vec<u8>,
}

impl Arc60Signer {
    /// Create a signer for `domain`.
    pub fn new(keypair: Ed25519KeyPair, domain: impl Into<String>) -> Self {
        Self {
            keypair,
            domain: domain.into(),
            extension: Vec::new(),
        }
    }

    /// Append extra authenticator bytes after the domain hash.
    pub fn with_extension(mut self, extension: impl Into<Vec<u8>>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Address of the signing key.
    pub fn address(&self) -> String {
        self.keypair.address()
    }

    /// Domain this signer commits to.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Authenticator data for this signer's domain.
    pub fn authenticator_data(&self) -> Vec<u8> {
        let mut data = sha256(self.domain.as_bytes()).to_vec();
        data.extend_from_slice(&self.extension);
        data
    }

    /// Sign a serialized challenge.
    pub fn sign_challenge(&self, challenge: &str) -> SignaturePayload {
        let authenticator_data = self.authenticator_data();
        let signature = self
            .keypair
            .sign(&signing_message(challenge, &authenticator_data));

        SignaturePayload {
            challenge: challenge.to_string(),
            signature: BASE64.encode(signature.as_bytes()),
            signer: BASE64.encode(self.keypair.public_key().as_bytes()),
            domain: self.domain.clone(),
            authenticator_data: BASE64.encode(authenticator_data),
        }
    }
}
