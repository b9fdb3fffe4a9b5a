use std::io::BufRead;

use color_eyre::eyre::{Result, WrapErr, eyre};
use sharpr::{
    Email, ExposeSecret, GatewayService, Secret,
    adapters::{
        auth::{Argon2AdminVerifier, compute_password_hash},
        config::{
            DocumentStoreSettings, GatewayConfig, GatewaySettings,
            env::{
                ADMIN_PASSWORD_HASH_ENV_VAR, IDENTITY_PROVIDER_API_KEY_ENV_VAR,
                POSTMARK_AUTH_TOKEN_ENV_VAR, SESSION_SECRET_ENV_VAR,
            },
        },
        email::PostmarkEmailClient,
        identity::RestIdentityProvider,
        persistence::{PostgresDocumentStore, RestDocumentStore, configure_postgresql},
    },
    core::{DocumentStore, EmailClient},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: sharpr-server [hash-password]";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    match std::env::args().nth(1).as_deref() {
        None => {
            init_tracing()?;
            serve().await
        }
        // Produces the value for SHARPR__ADMIN__PASSWORD_HASH
        Some("hash-password") => hash_password().await,
        Some(_) => Err(eyre!(USAGE)),
    }
}

async fn serve() -> Result<()> {
    let settings = GatewaySettings::load().wrap_err_with(|| {
        format!(
            "Failed to load settings; secrets come from {SESSION_SECRET_ENV_VAR}, \
             {ADMIN_PASSWORD_HASH_ENV_VAR}, {IDENTITY_PROVIDER_API_KEY_ENV_VAR} and \
             {POSTMARK_AUTH_TOKEN_ENV_VAR}"
        )
    })?;
    let config = GatewayConfig::from_settings(&settings)?;

    let http_clients = settings.http_clients()?;

    let identity_provider = RestIdentityProvider::new(
        settings.identity_provider.base_url.clone(),
        settings.identity_provider.api_key.clone(),
        http_clients.upstream.clone(),
    );

    let admin_verifier = Argon2AdminVerifier::new(
        Email::parse(&settings.admin.email).wrap_err("admin.email")?,
        settings.admin.password_hash.clone(),
    );

    let email_client = PostmarkEmailClient::new(
        settings.email_client.base_url.clone(),
        Email::parse(&settings.email_client.sender).wrap_err("email_client.sender")?,
        settings.email_client.auth_token.clone(),
        http_clients.email,
    );

    match &settings.document_store {
        DocumentStoreSettings::Rest {
            base_url,
            project_id,
            access_token,
        } => {
            let document_store = RestDocumentStore::new(
                base_url.clone(),
                project_id.clone(),
                access_token.clone(),
                http_clients.upstream,
            );
            run(
                &settings,
                config,
                identity_provider,
                document_store,
                admin_verifier,
                email_client,
            )
            .await
        }
        DocumentStoreSettings::Postgres { url } => {
            let pool = configure_postgresql(url.expose_secret())
                .await
                .wrap_err("Failed to prepare PostgreSQL")?;
            run(
                &settings,
                config,
                identity_provider,
                PostgresDocumentStore::new(pool),
                admin_verifier,
                email_client,
            )
            .await
        }
    }
}

async fn run<D, E>(
    settings: &GatewaySettings,
    config: GatewayConfig,
    identity_provider: RestIdentityProvider,
    document_store: D,
    admin_verifier: Argon2AdminVerifier,
    email_client: E,
) -> Result<()>
where
    D: DocumentStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let gateway = GatewayService::new(
        identity_provider,
        document_store,
        admin_verifier,
        email_client,
        config,
        settings.application.assets_dir.clone(),
    );

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting Sharpr gateway...");

    gateway
        .run_standalone(listener, Some(settings.application.allowed_origins.clone()))
        .await?;

    Ok(())
}

async fn hash_password() -> Result<()> {
    let mut password = String::new();
    std::io::stdin().lock().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(eyre!("expected the admin password on stdin"));
    }

    let hash = compute_password_hash(Secret::new(password.to_owned()))
        .await
        .map_err(|e| eyre!(e))?;
    println!("{}", hash.expose_secret());

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
