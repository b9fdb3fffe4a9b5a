use sharpr_core::{Email, EmailClient};

#[derive(Debug, Clone, Default)]
pub struct MockEmailClient;

impl MockEmailClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        _content: &str,
    ) -> Result<(), String> {
        tracing::debug!(?recipient, subject, "Mock email client dropped message");
        Ok(())
    }
}
