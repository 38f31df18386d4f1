use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::account::AccountKind;
use crate::error::ApiError;
use crate::jwt::{self, Claims};
use crate::state::AppState;
use crate::util::now_ts;

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();

    let (scheme, rest) = raw.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = rest.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

/// Sign a seven-day session token for a resolved account.
pub fn sign_session(
    state: &AppState,
    kind: AccountKind,
    user_id: &str,
    email: &str,
) -> Result<String, ApiError> {
    let claims = Claims::new(kind, user_id, email, now_ts());
    jwt::issue_token(state.jwt_secret(), &claims)
        .map_err(|e| ApiError::internal("Failed to sign session token", &e))
}

/// A request carrying a valid session token.
pub struct Authenticated {
    pub claims: Claims,
}

impl Authenticated {
    pub fn require(&self, kind: AccountKind) -> Result<&Claims, ApiError> {
        if self.claims.role != kind {
            return Err(ApiError::Forbidden(
                "This endpoint is not available for your role".to_string(),
            ));
        }
        Ok(&self.claims)
    }
}

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers).ok_or(ApiError::MissingToken)?;
        let claims = jwt::verify_token(state.jwt_secret(), &token, now_ts())?;
        Ok(Self { claims })
    }
}
