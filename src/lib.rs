//! # Sharpr - marketing site gateway
//!
//! Facade crate re-exporting the public APIs of the gateway components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Credentials`, `Role`, `UserRecord`, `SignedIn`, etc.
//! - **Validation**: field rules, `FieldMonitor`, `ContactForm`
//! - **Ports**: `IdentityProvider`, `DocumentStore`, `AdminVerifier`, `EmailClient`
//! - **Use cases**: `ParentLoginUseCase`, `AdminLoginUseCase`, `RegisterParentUseCase`,
//!   `SubmitContactUseCase`
//! - **Adapters**: REST and in-memory identity providers, REST / PostgreSQL / in-memory
//!   document stores, Postmark email client, session cookies, settings, axum routes
//! - **Service**: `GatewayService` - router assembly and standalone runner

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, validation and ports
pub mod core {
    pub use sharpr_core::*;
}

pub use sharpr_core::{
    ContactForm, ContactFormErrors, Credentials, Email, FieldError, FieldMonitor, FieldState,
    FormField, RedirectTarget, Role, SignedIn, UserId, UserRecord, validate_email,
    validate_message, validate_name,
};

// ============================================================================
// Ports
// ============================================================================

pub use sharpr_core::{
    AdminVerifier, DocumentStore, DocumentStoreError, EmailClient, IdentityProvider,
    IdentityProviderError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use sharpr_application::*;
}

pub use sharpr_application::{
    AdminLoginUseCase, AuthError, ParentLoginUseCase, RegisterParentUseCase, SubmissionGuard,
    SubmitContactUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use sharpr_adapters::http::*;
    }

    /// Document store implementations
    pub mod persistence {
        pub use sharpr_adapters::persistence::*;
    }

    /// Identity provider implementations
    pub mod identity {
        pub use sharpr_adapters::identity::*;
    }

    /// Email client implementations
    pub mod email {
        pub use sharpr_adapters::email::*;
    }

    /// Session tokens and admin credential checks
    pub mod auth {
        pub use sharpr_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use sharpr_adapters::config::*;
    }
}

pub use sharpr_adapters::{
    email::{MockEmailClient, PostmarkEmailClient},
    identity::{HashMapIdentityProvider, RestIdentityProvider},
    persistence::{
        HashMapDocumentStore, PostgresDocumentStore, RestDocumentStore, configure_postgresql,
    },
};

// ============================================================================
// Gateway Service (Main Entry Point)
// ============================================================================

pub use sharpr_service::GatewayService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
