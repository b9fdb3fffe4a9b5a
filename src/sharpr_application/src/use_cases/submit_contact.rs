use sharpr_core::{ContactForm, ContactFormErrors, Email, EmailClient};

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Invalid contact form: {0}")]
    Invalid(#[from] ContactFormErrors),
    #[error("Failed to send email: {0}")]
    EmailError(String),
}

/// Contact use case - validates an enquiry and forwards it to the inbox
pub struct SubmitContactUseCase<E>
where
    E: EmailClient,
{
    email_client: E,
    inbox: Email,
}

impl<E> SubmitContactUseCase<E>
where
    E: EmailClient,
{
    pub fn new(email_client: E, inbox: Email) -> Self {
        Self {
            email_client,
            inbox,
        }
    }

    #[tracing::instrument(name = "SubmitContactUseCase::execute", skip_all)]
    pub async fn execute(&self, form: ContactForm) -> Result<(), ContactError> {
        form.validate()?;

        let name = form.name.trim();
        let subject = format!("New enquiry from {name}");
        let content = format!(
            "From: {name} <{}>\n\n{}",
            form.email.trim(),
            form.message.trim()
        );

        self.email_client
            .send_email(&self.inbox, &subject, &content)
            .await
            .map_err(ContactError::EmailError)
    }
}
