use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sharpr_core::{Role, SignedIn};
use thiserror::Error;

use crate::config::constants::ADMIN_SESSION_SUBJECT;

#[derive(Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secret: Secret<String>,
    pub ttl_in_seconds: i64,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Missing token")]
    MissingToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
}

pub fn extract_token<'a>(jar: &'a CookieJar, cookie_name: &str) -> Result<&'a str, SessionError> {
    match jar.get(cookie_name) {
        Some(cookie) => Ok(cookie.value()),
        None => Err(SessionError::MissingToken),
    }
}

// Create a session cookie for a freshly signed-in user
pub fn generate_session_cookie(
    signed_in: &SignedIn,
    config: &SessionConfig,
) -> Result<Cookie<'static>, SessionError> {
    let token = generate_session_token(signed_in, config)?;
    Ok(create_session_cookie(token, &config.cookie_name))
}

pub fn create_session_cookie(token: String, cookie_name: &str) -> Cookie<'static> {
    Cookie::build((cookie_name.to_owned(), token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn generate_session_token(
    signed_in: &SignedIn,
    config: &SessionConfig,
) -> Result<String, SessionError> {
    let delta = chrono::Duration::try_seconds(config.ttl_in_seconds).ok_or(
        SessionError::UnexpectedError("Failed to create session duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(SessionError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let exp: usize = exp
        .try_into()
        .map_err(|_| SessionError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let sub = match &signed_in.user_id {
        Some(user_id) => user_id.to_string(),
        None => ADMIN_SESSION_SUBJECT.to_string(),
    };

    let claims = Claims {
        sub,
        role: signed_in.role.clone(),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.expose_secret().as_bytes()),
    )
    .map_err(SessionError::TokenError)
}

pub fn validate_session_token(token: &str, config: &SessionConfig) -> Result<Claims, SessionError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(SessionError::TokenError)
}
