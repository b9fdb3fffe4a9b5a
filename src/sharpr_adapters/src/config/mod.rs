pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AdminSettings, AllowedOrigins, ApplicationSettings, ContactSettings, DocumentStoreSettings,
    EmailClientSettings, GatewayConfig, GatewaySettings, HttpClients, IdentityProviderSettings,
    SessionSettings, SignInSettings,
};
