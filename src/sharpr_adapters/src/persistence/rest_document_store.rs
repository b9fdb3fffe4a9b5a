use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sharpr_core::{DocumentStore, DocumentStoreError, Role, USERS_COLLECTION, UserId, UserRecord};

/// Document store over the hosted document database REST API.
///
/// Records live at `projects/{project}/databases/(default)/documents/users/{id}`
/// with `role` and `name` as string fields and `createdAt` as a timestamp.
#[derive(Clone)]
pub struct RestDocumentStore {
    http_client: Client,
    base_url: String,
    project_id: String,
    access_token: Option<Secret<String>>,
}

impl RestDocumentStore {
    pub fn new(
        base_url: String,
        project_id: String,
        access_token: Option<Secret<String>>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            project_id,
            access_token,
        }
    }

    fn document_url(&self, id: &UserId) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{USERS_COLLECTION}/{}",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            id
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }
}

#[async_trait::async_trait]
impl DocumentStore for RestDocumentStore {
    #[tracing::instrument(name = "Fetching user document", skip_all)]
    async fn get_user(&self, id: &UserId) -> Result<UserRecord, DocumentStoreError> {
        let response = self
            .authorize(self.http_client.get(self.document_url(id)))
            .send()
            .await
            .map_err(|e| DocumentStoreError::UnexpectedError(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(DocumentStoreError::NotFound),
            status if !status.is_success() => {
                return Err(DocumentStoreError::UnexpectedError(format!(
                    "document store answered {status}"
                )));
            }
            _ => {}
        }

        let document: Document = response
            .json()
            .await
            .map_err(|e| DocumentStoreError::UnexpectedError(e.to_string()))?;

        document.into_record(id.clone())
    }

    #[tracing::instrument(name = "Writing user document", skip_all)]
    async fn set_user(&self, record: UserRecord) -> Result<(), DocumentStoreError> {
        let body = Document::from_record(&record);

        self.authorize(self.http_client.patch(self.document_url(record.id())))
            .json(&body)
            .send()
            .await
            .map_err(|e| DocumentStoreError::UnexpectedError(e.to_string()))?
            .error_for_status()
            .map_err(|e| DocumentStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(default)]
    fields: HashMap<String, Value>,
    #[serde(default, skip_serializing)]
    create_time: Option<DateTime<Utc>>,
}

// Only the value kinds a user document carries; others deserialize as empty
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Value {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp_value: Option<DateTime<Utc>>,
}

impl Value {
    fn string(value: String) -> Self {
        Self {
            string_value: Some(value),
            ..Default::default()
        }
    }

    fn timestamp(value: DateTime<Utc>) -> Self {
        Self {
            timestamp_value: Some(value),
            ..Default::default()
        }
    }
}

impl Document {
    fn from_record(record: &UserRecord) -> Self {
        let fields = HashMap::from([
            ("role".to_owned(), Value::string(record.role().to_string())),
            ("name".to_owned(), Value::string(record.name().to_owned())),
            ("createdAt".to_owned(), Value::timestamp(record.created_at())),
        ]);
        Self {
            fields,
            create_time: None,
        }
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key)?.string_value.as_deref()
    }

    fn into_record(self, id: UserId) -> Result<UserRecord, DocumentStoreError> {
        // A document without a role string cannot match any known role
        let role = Role::from(self.string_field("role").unwrap_or_default());
        let name = self.string_field("name").unwrap_or_default().to_owned();
        let created_at = self
            .fields
            .get("createdAt")
            .and_then(|value| value.timestamp_value)
            .or(self.create_time)
            .ok_or_else(|| {
            DocumentStoreError::UnexpectedError(format!("user document {id} has no creation time"))
        })?;

        Ok(UserRecord::new(id, role, name, created_at))
    }
}
