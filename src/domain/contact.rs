use std::hash::{Hash, Hasher};

use super::*;
pub use chrono::{DateTime, Utc};
use serde::Serialize;

/// A validated, immutable contact record.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    id: Uuid,
    first_name: String,
    last_name: String,
    phone_number: String,
    created_at: DateTime<Utc>,
}

impl Contact {
    /// Builds a contact, rejecting the first empty or blank field in
    /// first name, last name, phone number order.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, AppError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let phone_number = phone_number.into();

        require_non_blank(ContactField::FirstName, &first_name)?;
        require_non_blank(ContactField::LastName, &last_name)?;
        require_non_blank(ContactField::PhoneNumber, &phone_number)?;

        Ok(Contact {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            phone_number,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_fields(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name == first_name
            && self.last_name == last_name
            && self.phone_number == phone_number
    }
}

// Identity is the record's text, not the generated id
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.has_fields(&other.first_name, &other.last_name, &other.phone_number)
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first_name.hash(state);
        self.last_name.hash(state);
        self.phone_number.hash(state);
    }
}
