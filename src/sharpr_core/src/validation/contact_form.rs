use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use super::rules::{FieldError, FormField, validate_email, validate_message, validate_name};

/// An enquiry submitted through the contact page.
///
/// Missing fields deserialize as empty so they report `Required`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Validate every field, collecting the first error of each.
    pub fn validate(&self) -> Result<(), ContactFormErrors> {
        let errors = ContactFormErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            message: validate_message(&self.message).err(),
        };

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.summary())]
pub struct ContactFormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Message => self.message,
        }
    }

    /// Display messages keyed by field name, in a stable order.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        [FormField::Name, FormField::Email, FormField::Message]
            .into_iter()
            .filter_map(|field| {
                self.get(field)
                    .map(|error| (field.key(), error.message_for(field)))
            })
            .collect()
    }

    fn summary(&self) -> String {
        self.messages().into_values().collect::<Vec<_>>().join("; ")
    }
}
