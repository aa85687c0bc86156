use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::models::MatchType;

/// Application-specific error types.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Bad request error (malformed body or invalid parameter).
    BadRequest(String),
    /// `/authenticate` was called without a usable credential set.
    InvalidCredentials,
    /// Missing or malformed `Authorization` header.
    Unauthorized(String),
    /// Bearer token failed verification (bad signature, malformed or expired).
    TokenExpired,
    /// Enrich lookup found no company.
    CompanyNotFound,
    /// Enrich lookup found no contact.
    ContactNotFound,
    /// No route matched the request path.
    RouteNotFound,
    /// Internal server error.
    InternalError(String),
}

impl AppError {
    /// Stable machine-readable code carried in every error body.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "INVALID_REQUEST",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::TokenExpired => "TOKEN_EXPIRED",
            AppError::CompanyNotFound => "COMPANY_NOT_FOUND",
            AppError::ContactNotFound => "CONTACT_NOT_FOUND",
            AppError::RouteNotFound => "NOT_FOUND",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized(_) | AppError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            AppError::CompanyNotFound | AppError::ContactNotFound | AppError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::TokenExpired => write!(f, "Invalid or expired token"),
            AppError::CompanyNotFound => write!(f, "Company not found"),
            AppError::ContactNotFound => write!(f, "Contact not found"),
            AppError::RouteNotFound => write!(f, "Endpoint not found"),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Every body carries `success: false` and an `errorCode`; enrich misses
    /// also report `matchType: no_match`.
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let body = match &self {
            AppError::BadRequest(msg) => json!({
                "success": false,
                "error": msg,
                "errorCode": code,
            }),
            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized access: {}", msg);
                json!({
                    "success": false,
                    "error": msg,
                    "errorCode": code,
                })
            }
            AppError::InvalidCredentials | AppError::TokenExpired => {
                tracing::warn!("Authentication rejected: {}", self);
                json!({
                    "success": false,
                    "error": self.to_string(),
                    "errorCode": code,
                })
            }
            AppError::CompanyNotFound | AppError::ContactNotFound => json!({
                "success": false,
                "error": self.to_string(),
                "errorCode": code,
                "matchType": MatchType::NoMatch,
            }),
            AppError::RouteNotFound => json!({
                "success": false,
                "error": self.to_string(),
                "errorCode": code,
            }),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                json!({
                    "success": false,
                    "error": "Internal server error",
                    "errorCode": code,
                    "message": msg,
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    /// Malformed bodies keep the `success` envelope instead of axum's plain-text rejection.
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", err))
    }
}
