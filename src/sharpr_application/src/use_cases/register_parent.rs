use chrono::Utc;
use secrecy::Secret;
use sharpr_core::{
    Credentials, CredentialsError, DocumentStore, DocumentStoreError, Email, FieldError,
    FormField, IdentityProvider, IdentityProviderError, Role, UserId, UserRecord, validate_name,
};

/// Error types for the registration use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("{field} {error}")]
    InvalidField { field: FormField, error: FieldError },
    #[error("{0}")]
    Credentials(#[from] CredentialsError),
    #[error("Identity provider error: {0}")]
    IdentityProvider(#[from] IdentityProviderError),
    #[error("Document store error: {0}")]
    DocumentStore(#[from] DocumentStoreError),
}

/// Registration use case - creates a parent account and its role record.
///
/// The HTTP route is always mounted and refuses with 404 unless registration
/// is switched on in settings.
pub struct RegisterParentUseCase<P, D>
where
    P: IdentityProvider,
    D: DocumentStore,
{
    identity_provider: P,
    document_store: D,
}

impl<P, D> RegisterParentUseCase<P, D>
where
    P: IdentityProvider,
    D: DocumentStore,
{
    pub fn new(identity_provider: P, document_store: D) -> Self {
        Self {
            identity_provider,
            document_store,
        }
    }

    /// Execute the registration use case
    ///
    /// # Returns
    /// The identity provider key of the new account
    #[tracing::instrument(name = "RegisterParentUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        name: String,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<UserId, RegisterError> {
        validate_name(&name).map_err(|error| RegisterError::InvalidField {
            field: FormField::Name,
            error,
        })?;
        let email = Email::try_from(email).map_err(|error| RegisterError::InvalidField {
            field: FormField::Email,
            error,
        })?;
        let credentials = Credentials::new(email.as_ref().clone(), password)?;

        let identity = self.identity_provider.create_account(&credentials).await?;

        let record = UserRecord::new(
            identity.user_id().clone(),
            Role::Parent,
            name.trim().to_owned(),
            Utc::now(),
        );
        self.document_store.set_user(record).await?;

        tracing::info!(user_id = %identity.user_id(), "Registered parent account");
        Ok(identity.user_id().clone())
    }
}
