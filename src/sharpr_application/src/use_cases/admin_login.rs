use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use sharpr_core::{AdminVerifier, SignedIn};

use super::error::AuthError;
use crate::submission_guard::SubmissionGuard;

/// Admin login use case - checks the configured administrator credential.
///
/// The identity provider is not involved. Every attempt takes at least
/// `verification_delay`, so a mismatch answers no faster than a match.
pub struct AdminLoginUseCase<V>
where
    V: AdminVerifier,
{
    verifier: V,
    submissions: SubmissionGuard,
    verification_delay: Duration,
}

impl<V> AdminLoginUseCase<V>
where
    V: AdminVerifier,
{
    pub fn new(verifier: V, submissions: SubmissionGuard, verification_delay: Duration) -> Self {
        Self {
            verifier,
            submissions,
            verification_delay,
        }
    }

    #[tracing::instrument(name = "AdminLoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<SignedIn, AuthError> {
        let key = format!("admin:{}", email.expose_secret().trim().to_lowercase());
        let _ticket = self
            .submissions
            .try_begin(key)
            .ok_or(AuthError::SubmissionInProgress)?;

        let (verified, ()) = tokio::join!(
            self.verifier.verify(&email, &password),
            tokio::time::sleep(self.verification_delay)
        );

        match verified {
            Ok(true) => Ok(SignedIn::admin()),
            Ok(false) => {
                tracing::info!("Admin credential mismatch");
                Err(AuthError::InvalidCredentials)
            }
            Err(e) => Err(AuthError::UnexpectedError(e)),
        }
    }
}
