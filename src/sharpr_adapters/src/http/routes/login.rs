use std::time::Duration;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use sharpr_application::{AdminLoginUseCase, ParentLoginUseCase, SubmissionGuard};
use sharpr_core::{AdminVerifier, DocumentStore, IdentityProvider, RedirectTarget, Role, SignedIn};

use crate::auth::{SessionConfig, generate_session_cookie};

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default = "empty_secret")]
    pub email: Secret<String>,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub role: Role,
    pub redirect: String,
    pub notice_delay_ms: u64,
}

impl From<&SignedIn> for LoginResponse {
    fn from(signed_in: &SignedIn) -> Self {
        let message = match signed_in.redirect {
            RedirectTarget::ParentDashboard => "Login successful! Redirecting to your dashboard...",
            RedirectTarget::AdminDashboard => "Admin login successful!",
        };

        Self {
            message: message.to_owned(),
            role: signed_in.role.clone(),
            redirect: signed_in.redirect.to_string(),
            notice_delay_ms: u64::try_from(signed_in.notice_delay.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[derive(Clone)]
pub struct ParentLoginState<P, D> {
    pub identity_provider: P,
    pub document_store: D,
    pub submissions: SubmissionGuard,
    pub session: SessionConfig,
    pub notice_delay: Duration,
}

#[derive(Clone)]
pub struct AdminLoginState<V> {
    pub verifier: V,
    pub submissions: SubmissionGuard,
    pub session: SessionConfig,
    pub verification_delay: Duration,
}

#[tracing::instrument(name = "Parent login", skip_all)]
pub async fn parent_login<P, D>(
    State(state): State<ParentLoginState<P, D>>,
    jar: CookieJar,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    P: IdentityProvider + Clone + 'static,
    D: DocumentStore + Clone + 'static,
{
    let Json(request) = request?;

    let use_case = ParentLoginUseCase::new(
        state.identity_provider,
        state.document_store,
        state.submissions,
        state.notice_delay,
    );

    let signed_in = use_case.execute(request.email, request.password).await?;

    signed_in_response(jar, &signed_in, &state.session)
}

#[tracing::instrument(name = "Admin login", skip_all)]
pub async fn admin_login<V>(
    State(state): State<AdminLoginState<V>>,
    jar: CookieJar,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    V: AdminVerifier + Clone + 'static,
{
    let Json(request) = request?;

    let use_case =
        AdminLoginUseCase::new(state.verifier, state.submissions, state.verification_delay);

    let signed_in = use_case.execute(request.email, request.password).await?;

    signed_in_response(jar, &signed_in, &state.session)
}

fn signed_in_response(
    jar: CookieJar,
    signed_in: &SignedIn,
    session: &SessionConfig,
) -> Result<(CookieJar, (StatusCode, Json<LoginResponse>)), AuthApiError> {
    let session_cookie = generate_session_cookie(signed_in, session)?;
    let jar = jar.add(session_cookie);

    Ok((
        jar,
        (StatusCode::OK, Json(LoginResponse::from(signed_in))),
    ))
}
