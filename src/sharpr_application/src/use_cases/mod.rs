pub mod admin_login;
pub mod error;
pub mod parent_login;
pub mod register_parent;
pub mod submit_contact;

pub use admin_login::AdminLoginUseCase;
pub use error::AuthError;
pub use parent_login::ParentLoginUseCase;
pub use register_parent::{RegisterError, RegisterParentUseCase};
pub use submit_contact::{ContactError, SubmitContactUseCase};
