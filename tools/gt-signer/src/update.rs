//! Build signed `PUT /terms` bodies offline.

use gt_01_challenge_auth::{
    build_challenge, build_challenge_at, hash_content_hex, Arc60Signer, ChallengeError,
};
use gt_02_terms_gateway::UpdateTermsRequest;

/// Sign `content` with a challenge stamped now.
pub fn build_update(
    signer: &Arc60Signer,
    content: &str,
) -> Result<UpdateTermsRequest, ChallengeError> {
    let challenge = build_challenge(&signer.address(), &hash_content_hex(content))?;
    Ok(sign_update(signer, content, &challenge))
}

/// Sign `content` with a challenge stamped at `timestamp_ms`.
pub fn build_update_at(
    signer: &Arc60Signer,
    content: &str,
    timestamp_ms: i64,
) -> Result<UpdateTermsRequest, ChallengeError> {
    let challenge =
        build_challenge_at(&signer.address(), &hash_content_hex(content), timestamp_ms)?;
    Ok(sign_update(signer, content, &challenge))
}

/// Sign a challenge handed out by the gateway.
pub fn sign_update(signer: &Arc60Signer, content: &str, challenge: &str) -> UpdateTermsRequest {
    UpdateTermsRequest {
        content: content.to_string(),
        address: signer.address(),
        arc60: signer.sign_challenge(challenge),
    }
}
