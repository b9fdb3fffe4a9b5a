use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{user_id::UserId, user_record::UserRecord};

/// Collection holding one `UserRecord` per identity provider account.
pub const USERS_COLLECTION: &str = "users";

// DocumentStore port trait and errors
#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("Document not found")]
    NotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for DocumentStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NotFound, Self::NotFound) | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_user(&self, id: &UserId) -> Result<UserRecord, DocumentStoreError>;
    async fn set_user(&self, record: UserRecord) -> Result<(), DocumentStoreError>;
}
