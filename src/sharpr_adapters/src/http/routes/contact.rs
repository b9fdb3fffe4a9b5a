use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use sharpr_application::SubmitContactUseCase;
use sharpr_core::{ContactForm, Email, EmailClient};

use super::error::AuthApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}

#[tracing::instrument(name = "Contact", skip_all)]
pub async fn contact<E>(
    State((email_client, inbox)): State<(E, Email)>,
    form: Result<Json<ContactForm>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    E: EmailClient + Clone + 'static,
{
    let Json(form) = form?;
    let use_case = SubmitContactUseCase::new(email_client, inbox);

    use_case.execute(form).await?;

    Ok((
        StatusCode::OK,
        Json(ContactResponse {
            message: "Thank you! We'll be in touch soon.".to_owned(),
        }),
    ))
}
