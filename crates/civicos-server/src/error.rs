use std::fmt::Display;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::http::error_response;
use crate::jwt::JwtError;

/// Every failure a handler can report.
///
/// Internal details never reach the client; they are logged where the error is built.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    TokenExpired,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal<E: Display>(context: &str, err: &E) -> Self {
        tracing::error!(error = %err, "{context}");
        Self::Internal(context.to_string())
    }

    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::InvalidToken | Self::TokenExpired | Self::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::InvalidJson(_) => "invalid_json",
            Self::MissingToken => "missing_token",
            Self::InvalidToken => "invalid_token",
            Self::TokenExpired => "token_expired",
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Internal(_) => "internal_error",
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::InvalidJson(_) => "Invalid JSON body".to_string(),
            Self::MissingToken => "Missing Authorization Bearer token".to_string(),
            Self::InvalidToken => "Invalid token".to_string(),
            Self::TokenExpired => "Token expired".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::BadRequest(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Conflict(m) => m.clone(),
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        // A concurrent signup can slip past the existence check and trip the unique index.
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            tracing::warn!(detail = %detail, "unique constraint violation");
            return Self::Conflict("Account already exists".to_string());
        }
        Self::internal("Database error", &err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");
        Self::InvalidJson(rejection.body_text())
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => Self::TokenExpired,
            other => {
                tracing::debug!(error = %other, "rejected bearer token");
                Self::InvalidToken
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), self.code(), &self.public_message())
    }
}
