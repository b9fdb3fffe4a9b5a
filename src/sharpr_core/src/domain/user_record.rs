use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{role::Role, user_id::UserId};

/// Per-user document kept in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    id: UserId,
    role: Role,
    name: String,
    created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(id: UserId, role: Role, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            role,
            name,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
