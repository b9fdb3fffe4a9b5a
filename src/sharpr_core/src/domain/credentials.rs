use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use super::password::Password;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("Please enter your email and password")]
    EmptyEmail,
    #[error("Please enter your email and password")]
    EmptyPassword,
}

/// An email/password pair submitted to a sign-in form.
///
/// Only presence is checked here. The email is trimmed but otherwise passed
/// through untouched so the identity provider stays the judge of what a valid
/// account name is.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: Secret<String>,
    password: Password,
}

impl Credentials {
    pub fn new(email: Secret<String>, password: Secret<String>) -> Result<Self, CredentialsError> {
        let trimmed = email.expose_secret().trim();
        if trimmed.is_empty() {
            return Err(CredentialsError::EmptyEmail);
        }
        let email = Secret::new(trimmed.to_owned());
        let password = Password::try_from(password).map_err(|_| CredentialsError::EmptyPassword)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &Secret<String> {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Key identifying "the same sign-in" for duplicate submission checks.
    pub fn submission_key(&self) -> String {
        self.email.expose_secret().to_lowercase()
    }
}
