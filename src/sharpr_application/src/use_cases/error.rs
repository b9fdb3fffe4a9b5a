use sharpr_core::CredentialsError;

/// Why a sign-in attempt was rejected.
///
/// `InvalidCredentials` and `NotAuthorized` are surfaced to callers as the
/// same class of failure; they stay separate here so logs can tell a wrong
/// password from a valid account without the right role.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(#[from] CredentialsError),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("This account is not authorized to sign in here")]
    NotAuthorized,
    #[error("A sign-in for this account is already in progress")]
    SubmissionInProgress,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}
