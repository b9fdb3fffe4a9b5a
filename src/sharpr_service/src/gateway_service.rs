use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::post,
};
use sharpr_adapters::{
    config::{AllowedOrigins, GatewayConfig},
    http::routes::{
        AdminLoginState, ParentLoginState, RegisterState, admin_login, contact, parent_login,
        register, verify_session,
    },
};
use sharpr_application::SubmissionGuard;
use sharpr_core::{AdminVerifier, DocumentStore, EmailClient, IdentityProvider};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The marketing site's credential gateway plus its static pages
pub struct GatewayService {
    router: Router,
}

impl GatewayService {
    /// Create a new GatewayService from its ports
    ///
    /// # Arguments
    /// * `identity_provider` - Verifies parent email/password pairs
    /// * `document_store` - Holds the per-user role records
    /// * `admin_verifier` - Checks the configured administrator credential
    /// * `email_client` - Delivers contact enquiries
    /// * `config` - Session, delay and feature settings
    /// * `assets_dir` - Directory served for every other path
    ///
    /// # Note on Architecture
    /// Adapters are Clone (shared state lives behind an Arc), so each route
    /// gets only the state it needs. One submission guard is shared by both
    /// sign-in routes.
    pub fn new<P, D, V, E>(
        identity_provider: P,
        document_store: D,
        admin_verifier: V,
        email_client: E,
        config: GatewayConfig,
        assets_dir: String,
    ) -> Self
    where
        P: IdentityProvider + Clone + 'static,
        D: DocumentStore + Clone + 'static,
        V: AdminVerifier + Clone + 'static,
        E: EmailClient + Clone + 'static,
    {
        let assets_service =
            ServeDir::new(assets_dir.clone()).fallback(ServeFile::new(assets_dir + "/index.html"));

        let submissions = SubmissionGuard::new();

        let router = Router::new()
            .route("/login/parent", post(parent_login::<P, D>))
            .with_state(ParentLoginState {
                identity_provider: identity_provider.clone(),
                document_store: document_store.clone(),
                submissions: submissions.clone(),
                session: config.session.clone(),
                notice_delay: config.parent_notice_delay,
            })
            .route("/login/admin", post(admin_login::<V>))
            .with_state(AdminLoginState {
                verifier: admin_verifier,
                submissions,
                session: config.session.clone(),
                verification_delay: config.admin_verification_delay,
            })
            // Always mounted so a disabled registration answers 404, not the asset fallback
            .route("/register", post(register::<P, D>))
            .with_state(RegisterState {
                identity_provider,
                document_store,
                enabled: config.registration_enabled,
            })
            .route("/contact", post(contact::<E>))
            .with_state((email_client, config.contact_inbox))
            .route("/verify-session", post(verify_session))
            .with_state(config.session)
            .fallback_service(assets_service);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the GatewayService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the gateway as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Sharpr gateway listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
