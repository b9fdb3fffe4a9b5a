pub mod identity_provider;
pub mod repositories;
pub mod services;
