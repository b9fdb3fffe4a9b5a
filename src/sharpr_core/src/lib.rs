pub mod domain;
pub mod ports;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::{Credentials, CredentialsError},
    email::Email,
    identity::Identity,
    password::{Password, PasswordError},
    redirect::RedirectTarget,
    role::Role,
    signed_in::SignedIn,
    user_id::UserId,
    user_record::UserRecord,
};

pub use ports::{
    identity_provider::{IdentityProvider, IdentityProviderError},
    repositories::{DocumentStore, DocumentStoreError, USERS_COLLECTION},
    services::{AdminVerifier, EmailClient},
};

pub use validation::{
    contact_form::{ContactForm, ContactFormErrors},
    monitor::{FieldMonitor, FieldState},
    rules::{FieldError, FormField, validate_email, validate_message, validate_name},
};
