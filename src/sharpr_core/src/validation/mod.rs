//! Pure form validation shared by the contact form and registration.
//!
//! Every validator returns the first rule a value breaks; errors are never
//! accumulated per field.

pub mod contact_form;
pub mod monitor;
pub mod rules;
