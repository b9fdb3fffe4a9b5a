pub mod contact;
pub mod error;
pub mod login;
pub mod register;
pub mod verify_session;

pub use contact::{ContactResponse, contact};
pub use error::{AuthApiError, ErrorResponse};
pub use login::{AdminLoginState, LoginRequest, LoginResponse, ParentLoginState, admin_login, parent_login};
pub use register::{RegisterRequest, RegisterResponse, RegisterState, register};
pub use verify_session::{VerifySessionResponse, verify_session};
