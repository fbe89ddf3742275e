use contracts::system::auth::GoogleClaims;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Google's public signing keys for ID tokens
const GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Google client id is not configured")]
    MissingClientId,
    #[error("Malformed bearer token")]
    Malformed,
    #[error("Token signed with an unknown key: {0}")]
    UnknownKey(String),
    #[error("Token has expired")]
    Expired,
    #[error("Token issued for another application")]
    WrongAudience,
    #[error("Invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
    #[error("Failed to fetch Google keys: {0}")]
    KeyFetch(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

// Keys rotate rarely; cache them and refetch only on an unknown kid
static JWKS_CACHE: Lazy<RwLock<HashMap<String, Jwk>>> = Lazy::new(|| RwLock::new(HashMap::new()));

async fn fetch_keys() -> Result<(), VerifyError> {
    let jwks: JwkSet = reqwest::get(GOOGLE_JWKS_URL).await?.json().await?;
    let mut cache = JWKS_CACHE.write().await;
    cache.clear();
    for key in jwks.keys {
        cache.insert(key.kid.clone(), key);
    }
    tracing::info!("Refreshed Google JWKS cache ({} keys)", cache.len());
    Ok(())
}

async fn lookup_key(kid: &str) -> Result<Option<Jwk>, VerifyError> {
    {
        let cache = JWKS_CACHE.read().await;
        if let Some(key) = cache.get(kid) {
            return Ok(Some(key.clone()));
        }
    }
    // Not cached: the keys may have rotated
    fetch_keys().await?;
    let cache = JWKS_CACHE.read().await;
    Ok(cache.get(kid).cloned())
}

/// Verify a Google-issued ID token: RS256 signature against Google's
/// JWKS, audience equal to our client id, not expired. Returns the
/// claims the rest of the system works with.
pub async fn verify_id_token(token: &str, client_id: &str) -> Result<GoogleClaims, VerifyError> {
    if client_id.trim().is_empty() {
        return Err(VerifyError::MissingClientId);
    }

    let header = decode_header(token).map_err(|_| VerifyError::Malformed)?;
    let kid = header.kid.ok_or(VerifyError::Malformed)?;

    let jwk = lookup_key(&kid)
        .await?
        .ok_or_else(|| VerifyError::UnknownKey(kid))?;

    let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[client_id]);
    validation.set_issuer(&["https://accounts.google.com", "accounts.google.com"]);

    let data = decode::<GoogleClaims>(token, &key, &validation).map_err(|e| {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => VerifyError::Expired,
            ErrorKind::InvalidAudience => VerifyError::WrongAudience,
            _ => VerifyError::Invalid(e),
        }
    })?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_missing_client_id() {
        let err = verify_id_token("whatever", "").await.unwrap_err();
        assert!(matches!(err, VerifyError::MissingClientId));
    }

    #[tokio::test]
    async fn test_rejects_garbage_token() {
        let err = verify_id_token("not-a-jwt", "client-id").await.unwrap_err();
        assert!(matches!(err, VerifyError::Malformed));
    }
}
