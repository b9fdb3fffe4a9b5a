use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{credentials::Credentials, identity::Identity};

// IdentityProvider port trait and errors
#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account already exists")]
    AccountExists,
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for IdentityProviderError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::InvalidCredentials, Self::InvalidCredentials)
                | (Self::AccountExists, Self::AccountExists)
                | (Self::Unavailable(_), Self::Unavailable(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// External service that owns accounts and verifies passwords.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, IdentityProviderError>;
    async fn create_account(
        &self,
        credentials: &Credentials,
    ) -> Result<Identity, IdentityProviderError>;
}
