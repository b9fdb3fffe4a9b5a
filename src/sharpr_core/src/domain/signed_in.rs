use std::time::Duration;

use super::{redirect::RedirectTarget, role::Role, user_id::UserId};

/// Successful outcome of a sign-in attempt.
///
/// `notice_delay` is how long the client should show its success notice
/// before following `redirect`. It is cosmetic and plays no part in whether
/// the sign-in succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub user_id: Option<UserId>,
    pub role: Role,
    pub redirect: RedirectTarget,
    pub notice_delay: Duration,
}

impl SignedIn {
    pub fn parent(user_id: UserId, notice_delay: Duration) -> Self {
        Self {
            user_id: Some(user_id),
            role: Role::Parent,
            redirect: RedirectTarget::ParentDashboard,
            notice_delay,
        }
    }

    pub fn admin() -> Self {
        Self {
            user_id: None,
            role: Role::Admin,
            redirect: RedirectTarget::AdminDashboard,
            notice_delay: Duration::ZERO,
        }
    }
}
