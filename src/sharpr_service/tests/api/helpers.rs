use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Response, header};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use sharpr_adapters::{
    auth::{Argon2AdminVerifier, SessionConfig, compute_password_hash},
    config::{GatewayConfig, test},
    identity::HashMapIdentityProvider,
    persistence::HashMapDocumentStore,
};
use sharpr_core::{
    Credentials, DocumentStore, Email, EmailClient, IdentityProvider, Role, UserId, UserRecord,
};
use sharpr_service::GatewayService;
use tokio::sync::Mutex;

pub const ADMIN_EMAIL: &str = "admin@sharpr.org";
pub const ADMIN_PASSWORD: &str = "Sharpr#2024";
pub const COOKIE_NAME: &str = "sharpr_session";
pub const ADMIN_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub content: String,
}

#[derive(Clone, Default)]
pub struct RecordingEmailClient {
    pub sent: Arc<Mutex<Vec<SentEmail>>>,
}

#[async_trait::async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        self.sent.lock().await.push(SentEmail {
            recipient: recipient.as_ref().expose_secret().clone(),
            subject: subject.to_owned(),
            content: content.to_owned(),
        });
        Ok(())
    }
}

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub identity_provider: HashMapIdentityProvider,
    pub document_store: HashMapDocumentStore,
    pub email_client: RecordingEmailClient,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::spawn(false).await
    }

    pub async fn with_registration() -> Self {
        Self::spawn(true).await
    }

    async fn spawn(registration_enabled: bool) -> Self {
        let identity_provider = HashMapIdentityProvider::new();
        let document_store = HashMapDocumentStore::new();
        let email_client = RecordingEmailClient::default();

        let admin_hash = compute_password_hash(Secret::new(ADMIN_PASSWORD.to_owned()))
            .await
            .expect("Failed to hash admin password");
        let admin_verifier =
            Argon2AdminVerifier::new(Email::parse(ADMIN_EMAIL).unwrap(), admin_hash);

        let config = GatewayConfig {
            session: SessionConfig {
                cookie_name: COOKIE_NAME.to_owned(),
                secret: Secret::new("test-session-secret".to_owned()),
                ttl_in_seconds: 600,
            },
            contact_inbox: Email::parse("hello@sharpr.org").unwrap(),
            parent_notice_delay: Duration::from_millis(1500),
            admin_verification_delay: ADMIN_DELAY,
            registration_enabled,
        };

        let service = GatewayService::new(
            identity_provider.clone(),
            document_store.clone(),
            admin_verifier,
            email_client.clone(),
            config,
            concat!(env!("CARGO_MANIFEST_DIR"), "/tests/assets").to_owned(),
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            identity_provider,
            document_store,
            email_client,
        }
    }

    /// Create an account and store a record with the given role tag.
    pub async fn seed_user(&self, email: &str, password: &str, role: Role) -> UserId {
        let credentials = Credentials::new(
            Secret::new(email.to_owned()),
            Secret::new(password.to_owned()),
        )
        .unwrap();
        let identity = self
            .identity_provider
            .create_account(&credentials)
            .await
            .unwrap();

        self.document_store
            .set_user(UserRecord::new(
                identity.user_id().clone(),
                role,
                "Test Parent".to_owned(),
                Utc::now(),
            ))
            .await
            .unwrap();

        identity.user_id().clone()
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.http_client
            .post(format!("{}{path}", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login_parent(&self, body: &Value) -> Response {
        self.post_json("/login/parent", body).await
    }

    pub async fn login_admin(&self, body: &Value) -> Response {
        self.post_json("/login/admin", body).await
    }

    pub async fn register(&self, body: &Value) -> Response {
        self.post_json("/register", body).await
    }

    pub async fn contact(&self, body: &Value) -> Response {
        self.post_json("/contact", body).await
    }

    pub async fn verify_session(&self, token: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}/verify-session", self.address));
        if let Some(token) = token {
            request = request.header(header::COOKIE, format!("{COOKIE_NAME}={token}"));
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{path}", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// The session cookie is `Secure`, so a cookie store would not replay it over
/// plain HTTP; read it straight from the response instead.
pub fn session_token(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let (pair, _attributes) = cookie.split_once(';').unwrap_or((cookie, ""));
            let (name, value) = pair.split_once('=')?;
            (name.trim() == COOKIE_NAME).then(|| value.trim().to_owned())
        })
}

pub async fn error_message(response: Response) -> String {
    let body: Value = response.json().await.expect("Failed to read error body");
    body["error"].as_str().unwrap_or_default().to_owned()
}
