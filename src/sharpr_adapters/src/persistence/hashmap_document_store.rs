use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use sharpr_core::{DocumentStore, DocumentStoreError, UserId, UserRecord};

#[derive(Default, Clone)]
pub struct HashMapDocumentStore {
    users: Arc<RwLock<HashMap<UserId, UserRecord>>>,
}

impl HashMapDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DocumentStore for HashMapDocumentStore {
    async fn get_user(&self, id: &UserId) -> Result<UserRecord, DocumentStoreError> {
        let users = self.users.read().await;
        users.get(id).cloned().ok_or(DocumentStoreError::NotFound)
    }

    async fn set_user(&self, record: UserRecord) -> Result<(), DocumentStoreError> {
        let mut users = self.users.write().await;
        users.insert(record.id().clone(), record);
        Ok(())
    }
}
