use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;
use sharpr_core::Email;

use super::constants::{CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR, prod};
use crate::auth::SessionConfig;

/// Everything the gateway reads at start-up.
///
/// Values come from `config/base.json` (optional) overlaid with
/// `SHARPR__SECTION__KEY` environment variables. Secrets have no defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    #[serde(default)]
    pub application: ApplicationSettings,
    pub identity_provider: IdentityProviderSettings,
    pub document_store: DocumentStoreSettings,
    pub admin: AdminSettings,
    pub session: SessionSettings,
    #[serde(default)]
    pub sign_in: SignInSettings,
    pub contact: ContactSettings,
    pub email_client: EmailClientSettings,
}

impl GatewaySettings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Only the email client carries a timeout; sign-in and role lookups wait
    /// for the remote services.
    pub fn http_clients(&self) -> Result<HttpClients, reqwest::Error> {
        Ok(HttpClients {
            upstream: reqwest::Client::new(),
            email: reqwest::Client::builder()
                .timeout(self.email_client.timeout())
                .build()?,
        })
    }
}

/// Outbound HTTP clients: `upstream` for the identity provider and document
/// store, `email` for contact delivery.
#[derive(Debug, Clone)]
pub struct HttpClients {
    pub upstream: reqwest::Client,
    pub email: reqwest::Client,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            assets_dir: default_assets_dir(),
            allowed_origins: AllowedOrigins::default(),
        }
    }
}

fn default_address() -> String {
    prod::APP_ADDRESS.to_owned()
}

fn default_assets_dir() -> String {
    "assets".to_owned()
}

/// Origins allowed to call the gateway from a browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityProviderSettings {
    pub base_url: String,
    pub api_key: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentStoreSettings {
    Rest {
        base_url: String,
        project_id: String,
        #[serde(default)]
        access_token: Option<Secret<String>>,
    },
    Postgres {
        url: Secret<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminSettings {
    pub email: String,
    pub password_hash: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    pub secret: Secret<String>,
    #[serde(default = "default_session_ttl")]
    pub ttl_in_seconds: i64,
}

fn default_cookie_name() -> String {
    "sharpr_session".to_owned()
}

fn default_session_ttl() -> i64 {
    60 * 60
}

impl From<&SessionSettings> for SessionConfig {
    fn from(settings: &SessionSettings) -> Self {
        SessionConfig {
            cookie_name: settings.cookie_name.clone(),
            secret: settings.secret.clone(),
            ttl_in_seconds: settings.ttl_in_seconds,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignInSettings {
    #[serde(default = "default_parent_notice_delay_ms")]
    pub parent_notice_delay_ms: u64,
    #[serde(default = "default_admin_verification_delay_ms")]
    pub admin_verification_delay_ms: u64,
    #[serde(default)]
    pub registration_enabled: bool,
}

impl Default for SignInSettings {
    fn default() -> Self {
        Self {
            parent_notice_delay_ms: default_parent_notice_delay_ms(),
            admin_verification_delay_ms: default_admin_verification_delay_ms(),
            registration_enabled: false,
        }
    }
}

fn default_parent_notice_delay_ms() -> u64 {
    1500
}

fn default_admin_verification_delay_ms() -> u64 {
    800
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSettings {
    pub inbox: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    #[serde(default = "default_email_base_url")]
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    #[serde(default = "default_email_timeout_ms")]
    pub timeout_in_millis: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

fn default_email_base_url() -> String {
    prod::email_client::BASE_URL.to_owned()
}

fn default_email_timeout_ms() -> u64 {
    prod::email_client::TIMEOUT.as_millis() as u64
}

/// Runtime values the HTTP routes need, resolved from settings.
#[derive(Clone)]
pub struct GatewayConfig {
    pub session: SessionConfig,
    pub contact_inbox: Email,
    pub parent_notice_delay: Duration,
    pub admin_verification_delay: Duration,
    pub registration_enabled: bool,
}

impl GatewayConfig {
    pub fn from_settings(settings: &GatewaySettings) -> Result<Self, ConfigError> {
        let contact_inbox = Email::parse(&settings.contact.inbox).map_err(|e| {
            ConfigError::Message(format!("contact.inbox {e}"))
        })?;

        Ok(Self {
            session: SessionConfig::from(&settings.session),
            contact_inbox,
            parent_notice_delay: Duration::from_millis(settings.sign_in.parent_notice_delay_ms),
            admin_verification_delay: Duration::from_millis(
                settings.sign_in.admin_verification_delay_ms,
            ),
            registration_enabled: settings.sign_in.registration_enabled,
        })
    }
}
