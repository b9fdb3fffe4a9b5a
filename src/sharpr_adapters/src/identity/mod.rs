pub mod hashmap_identity_provider;
pub mod rest_identity_provider;

pub use hashmap_identity_provider::HashMapIdentityProvider;
pub use rest_identity_provider::RestIdentityProvider;
