//! Minimal HS256 JWT utilities.
//!
//! - Only supports JSON objects for header/payload.
//! - Uses base64url encoding WITHOUT padding.
//! - Performs signature verification using `Hmac::verify_slice`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use entity::account::AccountKind;

/// Session tokens are valid for seven days.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("invalid JWT format")]
    Format,

    #[error("invalid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid JWT JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported JWT header")]
    UnsupportedHeader,

    #[error("invalid HMAC key")]
    Key,

    #[error("invalid JWT signature")]
    Signature,

    #[error("token expired")]
    Expired,
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtHeader {
    alg: String,
    typ: String,
}

/// Claims carried by a session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub role: AccountKind,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(role: AccountKind, user_id: &str, email: &str, now: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        }
    }
}

fn b64url_encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

fn b64url_decode(s: &str) -> Result<Vec<u8>, JwtError> {
    Ok(URL_SAFE_NO_PAD.decode(s.as_bytes())?)
}

fn mac(secret: &[u8]) -> Result<Hmac<Sha256>, JwtError> {
    Hmac::<Sha256>::new_from_slice(secret).map_err(|_| JwtError::Key)
}

/// Encode claims as an HS256-signed JWT.
pub fn encode_hs256<T: Serialize>(secret: &[u8], claims: &T) -> Result<String, JwtError> {
    let header = JwtHeader {
        alg: "HS256".to_string(),
        typ: "JWT".to_string(),
    };

    let header_b64 = b64url_encode(&serde_json::to_vec(&header)?);
    let claims_b64 = b64url_encode(&serde_json::to_vec(claims)?);
    let signing_input = format!("{header_b64}.{claims_b64}");

    let mut mac = mac(secret)?;
    mac.update(signing_input.as_bytes());
    let sig_b64 = b64url_encode(&mac.finalize().into_bytes());

    Ok(format!("{signing_input}.{sig_b64}"))
}

/// Decode an HS256 JWT and verify signature.
///
/// This does not validate `exp`; see [`verify_token`].
pub fn decode_hs256<T: DeserializeOwned>(secret: &[u8], token: &str) -> Result<T, JwtError> {
    let token = token.replace(char::is_whitespace, "");
    let mut parts = token.split('.');
    let (Some(header_b64), Some(payload_b64), Some(sig_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(JwtError::Format);
    };

    let header: JwtHeader = serde_json::from_slice(&b64url_decode(header_b64)?)?;
    if header.alg != "HS256" || !header.typ.eq_ignore_ascii_case("JWT") {
        return Err(JwtError::UnsupportedHeader);
    }

    let signing_input = format!("{header_b64}.{payload_b64}");
    let sig = b64url_decode(sig_b64)?;

    let mut mac = mac(secret)?;
    mac.update(signing_input.as_bytes());
    mac.verify_slice(&sig).map_err(|_| JwtError::Signature)?;

    Ok(serde_json::from_slice(&b64url_decode(payload_b64)?)?)
}

pub fn issue_token(secret: &[u8], claims: &Claims) -> Result<String, JwtError> {
    encode_hs256(secret, claims)
}

/// Verify signature and expiry, returning the session claims.
pub fn verify_token(secret: &[u8], token: &str, now: i64) -> Result<Claims, JwtError> {
    let claims: Claims = decode_hs256(secret, token)?;
    if claims.exp <= now {
        return Err(JwtError::Expired);
    }
    Ok(claims)
}
