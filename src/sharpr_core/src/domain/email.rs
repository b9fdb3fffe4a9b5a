use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

use crate::validation::rules::{FieldError, validate_email};

/// A syntactically valid email address.
///
/// Used wherever the gateway itself needs an address it can trust (contact
/// inbox, email sender, registration, admin identity). Login input is not
/// parsed into an `Email`: malformed addresses are left for the identity
/// provider to reject.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        Self::try_from(Secret::new(raw.to_owned()))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = FieldError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        validate_email(value.expose_secret())?;
        Ok(Self(Secret::new(value.expose_secret().trim().to_owned())))
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
