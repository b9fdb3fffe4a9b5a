use std::time::Duration;

use secrecy::Secret;
use sharpr_core::{
    Credentials, DocumentStore, DocumentStoreError, IdentityProvider, Role, SignedIn,
};

use super::error::AuthError;
use crate::submission_guard::SubmissionGuard;

/// Parent login use case - authenticate, then check the parent role
pub struct ParentLoginUseCase<P, D>
where
    P: IdentityProvider,
    D: DocumentStore,
{
    identity_provider: P,
    document_store: D,
    submissions: SubmissionGuard,
    notice_delay: Duration,
}

impl<P, D> ParentLoginUseCase<P, D>
where
    P: IdentityProvider,
    D: DocumentStore,
{
    pub fn new(
        identity_provider: P,
        document_store: D,
        submissions: SubmissionGuard,
        notice_delay: Duration,
    ) -> Self {
        Self {
            identity_provider,
            document_store,
            submissions,
            notice_delay,
        }
    }

    /// Execute the parent login use case
    ///
    /// # Arguments
    /// * `email` - Email as typed into the sign-in form
    /// * `password` - Password as typed into the sign-in form
    ///
    /// # Returns
    /// SignedIn pointing at the parent dashboard, or the reason for rejection
    #[tracing::instrument(name = "ParentLoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<SignedIn, AuthError> {
        // Empty fields never reach the network
        let credentials = Credentials::new(email, password)?;

        let _ticket = self
            .submissions
            .try_begin(format!("parent:{}", credentials.submission_key()))
            .ok_or(AuthError::SubmissionInProgress)?;

        let identity = self
            .identity_provider
            .sign_in(&credentials)
            .await
            .map_err(|e| {
                tracing::info!(error = %e, "Identity provider rejected sign-in");
                AuthError::InvalidCredentials
            })?;

        let record = match self.document_store.get_user(identity.user_id()).await {
            Ok(record) => record,
            Err(DocumentStoreError::NotFound) => {
                tracing::warn!(user_id = %identity.user_id(), "Authenticated user has no record");
                return Err(AuthError::NotAuthorized);
            }
            Err(e) => return Err(AuthError::UnexpectedError(e.to_string())),
        };

        if record.role() != &Role::Parent {
            tracing::warn!(
                user_id = %identity.user_id(),
                role = %record.role(),
                "Authenticated user is not a parent"
            );
            return Err(AuthError::NotAuthorized);
        }

        Ok(SignedIn::parent(identity.user_id().clone(), self.notice_delay))
    }
}
