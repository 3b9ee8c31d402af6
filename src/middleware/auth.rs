use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::account::Account;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub exp: usize,
}

pub fn issue_token(account: &Account, secret: &str, ttl_hours: i64) -> Result<String> {
    let exp = (Utc::now() + chrono::Duration::hours(ttl_hours)).timestamp() as usize;
    let claims = Claims {
        sub: account.id,
        username: account.username.clone(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Token encoding failed: {}", e)))
}

pub fn decode_claims(token: &str, secret: &str) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .ok()
}

/// Claims from the Authorization header, or None for anonymous requests.
/// Handlers that behave differently for guests call this directly instead
/// of sitting behind `require_bearer_auth`.
pub fn claims_from_headers(headers: &HeaderMap) -> Option<Claims> {
    let auth_str = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?;
    let config = crate::config::get_config();
    decode_claims(token, &config.jwt_secret)
}

pub async fn require_bearer_auth(mut req: Request, next: Next) -> Response {
    match claims_from_headers(req.headers()) {
        Some(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Необходимо зарегистрироваться"})),
        )
            .into_response(),
    }
}
