use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use sharpr_core::Role;

use crate::auth::{SessionConfig, extract_token, validate_session_token};

use super::error::AuthApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifySessionResponse {
    pub role: Role,
}

#[tracing::instrument(name = "Verify session", skip_all)]
pub async fn verify_session(
    State(session): State<SessionConfig>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthApiError> {
    let token = extract_token(&jar, &session.cookie_name)?;
    let claims = validate_session_token(token, &session)?;

    Ok((StatusCode::OK, Json(VerifySessionResponse { role: claims.role })))
}
