use std::sync::Arc;

use crate::errors::RequestError;
use anyhow::{Context, Result};
use argon2::PasswordVerifier;
use argon2::{password_hash::SaltString, Argon2, PasswordHash};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sub: String,
    exp: i64,
}

/// Signing and verification keys plus the default expiry, built from the
/// configured secret at startup and shared through an Extension. Rotating
/// the secret invalidates every token issued under the old one.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    default_ttl: time::Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, default_ttl: time::Duration) -> Self {
        TokenKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            default_ttl,
        }
    }

    /// Issues a token for `subject` expiring after the configured TTL.
    pub fn issue(&self, subject: &str) -> Result<String> {
        self.issue_with_expiry(subject, self.default_ttl)
    }

    pub fn issue_with_expiry(&self, subject: &str, ttl: time::Duration) -> Result<String> {
        let expiry_date = OffsetDateTime::now_utc() + ttl;
        let claims = TokenClaims {
            sub: subject.to_string(),
            exp: expiry_date.unix_timestamp(),
        };

        jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims, &self.encoding)
            .context("Failed to sign token")
    }

    /// Returns the subject the token was issued for. Fails when the token
    /// cannot be decoded under the current key or its expiry has passed;
    /// the caller gets one opaque message either way.
    pub fn validate(&self, token: &str) -> Result<String, RequestError> {
        let token_data = jsonwebtoken::decode::<TokenClaims>(
            token,
            &self.decoding,
            &jsonwebtoken::Validation::default(),
        )
        .map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            RequestError::NotAuthorized("Invalid credentials")
        })?;
        let claims = token_data.claims;
        // The decoder allows a little clock leeway; the contract does not.
        if claims.exp < OffsetDateTime::now_utc().unix_timestamp() {
            return Err(RequestError::NotAuthorized("Invalid credentials"));
        }
        Ok(claims.sub)
    }
}

/// Subject (username) of a validated bearer token. Extracting this is the
/// first step of every protected handler; requests without a valid
/// `Authorization: Bearer <token>` header never reach the handler body.
pub struct AuthSubject(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthSubject
where
    S: Send + Sync + 'static,
{
    type Rejection = RequestError;
    async fn from_request_parts(
        parts: &mut Parts,
        _: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let keys = parts
            .extensions
            .get::<Arc<TokenKeys>>()
            .cloned()
            .ok_or(RequestError::ServerError)?;

        let header = parts
            .headers
            .get("Authorization")
            .ok_or(RequestError::NotAuthorized("Not authenticated"))?;
        let header = header
            .to_str()
            .map_err(|_| RequestError::NotAuthorized("Not authenticated"))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(RequestError::NotAuthorized("Not authenticated"))?;

        let subject = keys.validate(token)?;
        Ok(AuthSubject(subject))
    }
}

pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || {
        let hash = PasswordHash::new(hash.as_str())
            .map_err(|_| anyhow::anyhow!("Failed to verify password"))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok())
    })
    .await
    .context("Failed to verify password")?
}

pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(rand::thread_rng());
        let hash = PasswordHash::generate(Argon2::default(), password, salt.as_salt())
            .map_err(|_| anyhow::anyhow!("Failed to hash password"))?;
        Ok(hash.to_string())
    })
    .await
    .context("Failed to hash password")?
}
