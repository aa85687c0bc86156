//! Token issuance and bearer-token verification.
//!
//! Any complete credential set is accepted; the token only proves that the
//! caller went through `/authenticate` within the last TTL window.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::handlers::AppState;
use crate::models::{AuthRequest, AuthResponse};

/// JWT claims carried by issued tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// Accepts `username + password` or `username + clientId + privateKey`.
pub fn credentials_present(request: &AuthRequest) -> bool {
    let username = present(&request.username);
    (username && present(&request.password))
        || (username && present(&request.client_id) && present(&request.private_key))
}

/// Signs a token for `request`, valid for `config.token_ttl_secs` from `now`.
pub fn issue_token(config: &Config, request: &AuthRequest, now: u64) -> Result<AuthResponse, AppError> {
    if !credentials_present(request) {
        return Err(AppError::InvalidCredentials);
    }

    let claims = Claims {
        username: request.username.clone().unwrap_or_default(),
        exp: now + config.token_ttl_secs,
    };

    let jwt = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))?;

    Ok(AuthResponse {
        success: true,
        jwt,
        expires_in: config.token_ttl_secs,
        token_type: "Bearer".to_string(),
    })
}

/// Verifies a raw token. Every failure, expiry included, maps to `TokenExpired`.
pub fn verify_token(config: &Config, token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("Token verification failed: {}", e);
        AppError::TokenExpired
    })
}

/// Middleware guarding every data endpoint.
///
/// Inserts the verified [`Claims`] into request extensions.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| {
            AppError::Unauthorized("Missing or invalid authorization header".to_string())
        })?;

    let claims = verify_token(&state.config, token)?;
    tracing::debug!("Authenticated request for {}", claims.username);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

pub fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
