pub mod admin_verifier;
pub mod session;

pub use admin_verifier::{Argon2AdminVerifier, compute_password_hash, verify_password_hash};
pub use session::{
    Claims, SessionConfig, SessionError, create_session_cookie, extract_token,
    generate_session_cookie, generate_session_token, validate_session_token,
};
