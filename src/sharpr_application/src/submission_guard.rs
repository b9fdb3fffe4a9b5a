use std::sync::Arc;

use dashmap::DashSet;

/// Tracks sign-in submissions that are still in flight.
///
/// A second submission for a key that already holds a ticket is refused
/// instead of reaching the identity provider. The ticket is released when it
/// is dropped, whether the request succeeded, failed or was cancelled.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    in_flight: Arc<DashSet<String>>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self, key: impl Into<String>) -> Option<SubmissionTicket> {
        let key = key.into();
        if !self.in_flight.insert(key.clone()) {
            return None;
        }

        Some(SubmissionTicket {
            key,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }
}

#[derive(Debug)]
pub struct SubmissionTicket {
    key: String,
    in_flight: Arc<DashSet<String>>,
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.in_flight.remove(&self.key);
    }
}
