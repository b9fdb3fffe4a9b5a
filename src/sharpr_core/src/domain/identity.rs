use secrecy::Secret;

use super::user_id::UserId;

/// What the identity provider hands back after verifying credentials.
#[derive(Debug, Clone)]
pub struct Identity {
    user_id: UserId,
    email: Secret<String>,
}

impl Identity {
    pub fn new(user_id: UserId, email: Secret<String>) -> Self {
        Self { user_id, email }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &Secret<String> {
        &self.email
    }
}
