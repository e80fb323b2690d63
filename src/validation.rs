use std::fmt;

use crate::errors::AppError;

/// The required text fields of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first name",
            ContactField::LastName => "last name",
            ContactField::PhoneNumber => "phone number",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn require_non_blank(field: ContactField, value: &str) -> Result<(), AppError> {
    // Whitespace-only counts as empty
    if value.trim().is_empty() {
        return Err(AppError::InvalidArgument(field));
    }
    Ok(())
}
