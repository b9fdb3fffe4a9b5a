use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use sharpr_application::{AuthError, ContactError, RegisterError};
use sharpr_core::{DocumentStoreError, IdentityProviderError};
use thiserror::Error;

use crate::auth::SessionError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Please correct the highlighted fields")]
    InvalidFields(BTreeMap<String, String>),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("This account is not authorized to sign in here")]
    NotAuthorized,

    #[error("Not signed in")]
    MissingSession,

    #[error("Session is invalid or has expired")]
    InvalidSession,

    #[error("A sign-in for this account is already in progress")]
    SubmissionInProgress,

    #[error("An account with this email already exists")]
    AccountExists,

    #[error("Not found")]
    NotFound,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AuthApiError::InvalidInput(_) | AuthApiError::InvalidFields(_) => {
                StatusCode::BAD_REQUEST
            }

            AuthApiError::InvalidCredentials
            | AuthApiError::NotAuthorized
            | AuthApiError::MissingSession
            | AuthApiError::InvalidSession => StatusCode::UNAUTHORIZED,

            AuthApiError::SubmissionInProgress | AuthApiError::AccountExists => {
                StatusCode::CONFLICT
            }

            AuthApiError::NotFound => StatusCode::NOT_FOUND,

            AuthApiError::UnexpectedError(ref e) => {
                tracing::error!(error = %e, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let error = self.to_string();
        let fields = match self {
            AuthApiError::InvalidFields(fields) => Some(fields),
            _ => None,
        };

        (status_code, Json(ErrorResponse { error, fields })).into_response()
    }
}

impl From<JsonRejection> for AuthApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Rejected request body");
        AuthApiError::InvalidInput("Request body is not valid JSON for this form".to_owned())
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Validation(e) => AuthApiError::InvalidInput(e.to_string()),
            AuthError::InvalidCredentials => AuthApiError::InvalidCredentials,
            AuthError::NotAuthorized => AuthApiError::NotAuthorized,
            AuthError::SubmissionInProgress => AuthApiError::SubmissionInProgress,
            AuthError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<IdentityProviderError> for AuthApiError {
    fn from(error: IdentityProviderError) -> Self {
        match error {
            IdentityProviderError::AccountExists => AuthApiError::AccountExists,
            // The provider refuses malformed emails and weak passwords this way on sign-up
            IdentityProviderError::InvalidCredentials => {
                AuthApiError::InvalidInput("Please check your email and password".to_owned())
            }
            IdentityProviderError::Unavailable(e) | IdentityProviderError::UnexpectedError(e) => {
                AuthApiError::UnexpectedError(e)
            }
        }
    }
}

impl From<DocumentStoreError> for AuthApiError {
    fn from(error: DocumentStoreError) -> Self {
        AuthApiError::UnexpectedError(error.to_string())
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::InvalidField { .. } | RegisterError::Credentials(_) => {
                AuthApiError::InvalidInput(error.to_string())
            }
            RegisterError::IdentityProvider(e) => e.into(),
            RegisterError::DocumentStore(e) => e.into(),
        }
    }
}

impl From<ContactError> for AuthApiError {
    fn from(error: ContactError) -> Self {
        match error {
            ContactError::Invalid(errors) => AuthApiError::InvalidFields(
                errors
                    .messages()
                    .into_iter()
                    .map(|(key, message)| (key.to_owned(), message))
                    .collect(),
            ),
            ContactError::EmailError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<SessionError> for AuthApiError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::MissingToken => AuthApiError::MissingSession,
            SessionError::TokenError(_) => AuthApiError::InvalidSession,
            SessionError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}
