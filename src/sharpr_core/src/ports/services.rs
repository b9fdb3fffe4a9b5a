use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::email::Email;

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String>;
}

/// Port trait for checking the administrator credential pair.
///
/// Returns `Ok(false)` for a mismatch and `Err` only when verification itself
/// could not run.
#[async_trait]
pub trait AdminVerifier: Send + Sync {
    async fn verify(&self, email: &Secret<String>, password: &Secret<String>)
    -> Result<bool, String>;
}
