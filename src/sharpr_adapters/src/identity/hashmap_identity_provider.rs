use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use sharpr_core::{Credentials, Identity, IdentityProvider, IdentityProviderError, Password, UserId};

#[derive(Clone)]
struct Account {
    user_id: UserId,
    password: Password,
}

/// In-memory identity provider keyed by lower-cased email.
#[derive(Default, Clone)]
pub struct HashMapIdentityProvider {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl HashMapIdentityProvider {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HashMapIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, IdentityProviderError> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(&credentials.submission_key())
            .ok_or(IdentityProviderError::InvalidCredentials)?;

        if &account.password != credentials.password() {
            return Err(IdentityProviderError::InvalidCredentials);
        }

        Ok(Identity::new(
            account.user_id.clone(),
            credentials.email().clone(),
        ))
    }

    async fn create_account(
        &self,
        credentials: &Credentials,
    ) -> Result<Identity, IdentityProviderError> {
        let mut accounts = self.accounts.write().await;
        let key = credentials.submission_key();
        if accounts.contains_key(&key) {
            return Err(IdentityProviderError::AccountExists);
        }

        let user_id = UserId::new(uuid::Uuid::new_v4().simple().to_string());
        accounts.insert(
            key,
            Account {
                user_id: user_id.clone(),
                password: credentials.password().clone(),
            },
        );

        tracing::debug!(%user_id, "Created in-memory account");
        Ok(Identity::new(user_id, credentials.email().clone()))
    }
}
