use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use sharpr_application::RegisterParentUseCase;
use sharpr_core::{DocumentStore, IdentityProvider};

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}

#[derive(Clone)]
pub struct RegisterState<P, D> {
    pub identity_provider: P,
    pub document_store: D,
    pub enabled: bool,
}

/// Self-service parent sign-up. Answers 404 while registration is switched off,
/// whatever the body.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<P, D>(
    State(state): State<RegisterState<P, D>>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    P: IdentityProvider + Clone + 'static,
    D: DocumentStore + Clone + 'static,
{
    if !state.enabled {
        return Err(AuthApiError::NotFound);
    }
    let Json(request) = request?;

    let use_case = RegisterParentUseCase::new(state.identity_provider, state.document_store);

    let user_id = use_case
        .execute(request.name, request.email, request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Account created successfully!".to_owned(),
            user_id: user_id.to_string(),
        }),
    ))
}
