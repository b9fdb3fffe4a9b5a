use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sharpr_core::{Credentials, Identity, IdentityProvider, IdentityProviderError, UserId};

/// Identity provider speaking the hosted identity-toolkit REST API
/// (`accounts:signInWithPassword` / `accounts:signUp`).
#[derive(Clone)]
pub struct RestIdentityProvider {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl RestIdentityProvider {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    async fn call(
        &self,
        operation: &str,
        credentials: &Credentials,
    ) -> Result<Identity, IdentityProviderError> {
        // Built by hand: a relative join would read "accounts:" as a scheme
        let url = format!(
            "{}/v1/accounts:{operation}",
            self.base_url.trim_end_matches('/')
        );

        let request_body = PasswordRequest {
            email: credentials.email().expose_secret(),
            password: credentials.password().as_ref().expose_secret(),
            return_secure_token: true,
        };

        let response = self
            .http_client
            .post(url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| IdentityProviderError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let account: AccountResponse = response
                .json()
                .await
                .map_err(|e| IdentityProviderError::UnexpectedError(e.to_string()))?;
            return Ok(Identity::new(
                UserId::new(account.local_id),
                credentials.email().clone(),
            ));
        }

        if status.is_server_error() {
            return Err(IdentityProviderError::Unavailable(status.to_string()));
        }

        let code = response
            .json::<ErrorEnvelope>()
            .await
            .map(|envelope| envelope.error.message)
            .unwrap_or_default();

        Err(map_error_code(status, &code))
    }
}

#[async_trait::async_trait]
impl IdentityProvider for RestIdentityProvider {
    #[tracing::instrument(name = "Signing in with identity provider", skip_all)]
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, IdentityProviderError> {
        self.call("signInWithPassword", credentials).await
    }

    #[tracing::instrument(name = "Creating identity provider account", skip_all)]
    async fn create_account(
        &self,
        credentials: &Credentials,
    ) -> Result<Identity, IdentityProviderError> {
        self.call("signUp", credentials).await
    }
}

// Codes arrive as "CODE" or "CODE : human readable detail"
fn map_error_code(status: StatusCode, message: &str) -> IdentityProviderError {
    let code = message.split_whitespace().next().unwrap_or_default();
    match code {
        "EMAIL_EXISTS" => IdentityProviderError::AccountExists,
        "EMAIL_NOT_FOUND"
        | "INVALID_PASSWORD"
        | "INVALID_LOGIN_CREDENTIALS"
        | "INVALID_EMAIL"
        | "MISSING_PASSWORD"
        | "USER_DISABLED" => IdentityProviderError::InvalidCredentials,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => IdentityProviderError::Unavailable(message.to_owned()),
        _ => IdentityProviderError::UnexpectedError(format!("{status}: {message}")),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
