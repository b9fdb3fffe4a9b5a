mod gateway_service;
mod tracing;

pub use gateway_service::GatewayService;

// Re-export commonly used types
pub use sharpr_core::{AdminVerifier, DocumentStore, EmailClient, IdentityProvider};
