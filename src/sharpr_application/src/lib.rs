pub mod submission_guard;
pub mod use_cases;

pub use submission_guard::{SubmissionGuard, SubmissionTicket};
pub use use_cases::{
    AdminLoginUseCase, AuthError, ContactError, ParentLoginUseCase, RegisterError,
    RegisterParentUseCase, SubmitContactUseCase,
};
