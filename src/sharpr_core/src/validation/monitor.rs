use std::time::{Duration, Instant};

use super::rules::{FieldError, FormField};

/// Lifecycle of a monitored form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Untouched,
    Touched(Result<(), FieldError>),
}

/// Tracks one form field between keystrokes and decides when its error may
/// be shown.
///
/// A field only reports an error after the user has interacted with it.
/// While the user is typing, the error is held back until the value has been
/// stable for the debounce interval; leaving the field shows it at once.
#[derive(Debug, Clone)]
pub struct FieldMonitor {
    field: FormField,
    value: String,
    state: FieldState,
    debounce: Duration,
    last_change: Option<Instant>,
    blurred: bool,
}

impl FieldMonitor {
    pub fn new(field: FormField, debounce: Duration) -> Self {
        Self {
            field,
            value: String::new(),
            state: FieldState::Untouched,
            debounce,
            last_change: None,
            blurred: false,
        }
    }

    pub fn field(&self) -> FormField {
        self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn change(&mut self, value: impl Into<String>, at: Instant) {
        self.value = value.into();
        self.last_change = Some(at);
        self.blurred = false;
        self.revalidate();
    }

    pub fn blur(&mut self) {
        self.blurred = true;
        self.revalidate();
    }

    /// Error to display at `now`, if any.
    pub fn visible_error(&self, now: Instant) -> Option<FieldError> {
        let FieldState::Touched(Err(error)) = self.state else {
            return None;
        };

        let settled = match self.last_change {
            Some(changed) => now.saturating_duration_since(changed) >= self.debounce,
            None => true,
        };

        (self.blurred || settled).then_some(error)
    }

    fn revalidate(&mut self) {
        self.state = FieldState::Touched((self.field.validator())(&self.value));
    }
}
