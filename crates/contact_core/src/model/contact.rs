//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical record stored by the contact directory.
//! - Enforce field-level constraints on construction and on every mutation.
//!
//! # Invariants
//! - `id` is set once at construction and never changes.
//! - Every field of a live `Contact` satisfies its constraint; setters validate
//!   before they write, so a failed mutation leaves the prior value in place.
//! - Values are stored exactly as provided (no trimming or normalization).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum contact ID length in UTF-16 code units.
pub const MAX_ID_CHARS: usize = 10;
/// Maximum first/last name length in UTF-16 code units.
pub const MAX_NAME_CHARS: usize = 10;
/// Exact number of ASCII digits in a phone number.
pub const PHONE_DIGITS: usize = 10;
/// Maximum address length in UTF-16 code units.
pub const MAX_ADDRESS_CHARS: usize = 30;

const BOUNDED_NAME_CONSTRAINT: &str = "must not be null and must be 10 characters or less";
const PHONE_CONSTRAINT: &str = "must not be null and must be exactly 10 digits";
const ADDRESS_CONSTRAINT: &str = "must not be null and must be 30 characters or less";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[0-9]{{{PHONE_DIGITS}}}$")).expect("valid phone regex")
});

/// Field selector used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    ContactId,
    FirstName,
    LastName,
    Phone,
    Address,
}

impl ContactField {
    /// Human-readable label used as the error message prefix.
    pub fn label(self) -> &'static str {
        match self {
            Self::ContactId => "Contact ID",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Phone => "Phone number",
            Self::Address => "Address",
        }
    }

    /// Stable snake_case name, safe for log metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContactId => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }

    /// Constraint text reported when this field is rejected.
    pub fn constraint(self) -> &'static str {
        match self {
            Self::ContactId | Self::FirstName | Self::LastName => BOUNDED_NAME_CONSTRAINT,
            Self::Phone => PHONE_CONSTRAINT,
            Self::Address => ADDRESS_CONSTRAINT,
        }
    }

    fn check(self, value: &str) -> Result<(), ContactValidationError> {
        let ok = match self {
            Self::ContactId => is_bounded(value, MAX_ID_CHARS),
            Self::FirstName | Self::LastName => is_bounded(value, MAX_NAME_CHARS),
            Self::Phone => PHONE_RE.is_match(value),
            Self::Address => is_bounded(value, MAX_ADDRESS_CHARS),
        };
        if ok {
            Ok(())
        } else {
            Err(ContactValidationError::InvalidField {
                field: self,
                constraint: self.constraint(),
            })
        }
    }
}

/// Validation error raised by construction or any setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// One field violated its constraint.
    InvalidField {
        field: ContactField,
        constraint: &'static str,
    },
}

impl ContactValidationError {
    /// Returns the rejected field.
    pub fn field(&self) -> ContactField {
        match self {
            Self::InvalidField { field, .. } => *field,
        }
    }
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField { field, constraint } => {
                write!(f, "{} {constraint}", field.label())
            }
        }
    }
}

impl Error for ContactValidationError {}

/// One validated contact record.
///
/// Fields are private so the only way to change them is through the
/// validating setters. Deserialization goes through `ContactWire` and
/// re-runs validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactWire")]
pub struct Contact {
    id: String,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

/// Unvalidated serde shape of [`Contact`].
#[derive(Debug, Deserialize)]
struct ContactWire {
    id: String,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

impl TryFrom<ContactWire> for Contact {
    type Error = ContactValidationError;

    fn try_from(value: ContactWire) -> Result<Self, Self::Error> {
        Self::new(
            value.id,
            value.first_name,
            value.last_name,
            value.phone,
            value.address,
        )
    }
}

impl Contact {
    /// Creates a contact after validating every field.
    ///
    /// Fields are checked in order id, first name, last name, phone, address;
    /// the first failing field is reported.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        let contact = Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            address: address.into(),
        };
        contact.validate()?;
        Ok(contact)
    }

    /// Re-checks all field constraints in declaration order.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        ContactField::ContactId.check(&self.id)?;
        ContactField::FirstName.check(&self.first_name)?;
        ContactField::LastName.check(&self.last_name)?;
        ContactField::Phone.check(&self.phone)?;
        ContactField::Address.check(&self.address)?;
        Ok(())
    }

    /// Returns the immutable contact ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the current first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the current last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the current 10-digit phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the current address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Replaces the first name; the old value is kept on failure.
    pub fn set_first_name(
        &mut self,
        value: impl Into<String>,
    ) -> Result<(), ContactValidationError> {
        let value = value.into();
        ContactField::FirstName.check(&value)?;
        self.first_name = value;
        Ok(())
    }

    /// Replaces the last name; the old value is kept on failure.
    pub fn set_last_name(
        &mut self,
        value: impl Into<String>,
    ) -> Result<(), ContactValidationError> {
        let value = value.into();
        ContactField::LastName.check(&value)?;
        self.last_name = value;
        Ok(())
    }

    /// Replaces the phone number; the old value is kept on failure.
    pub fn set_phone(
        &mut self,
        value: impl Into<String>,
    ) -> Result<(), ContactValidationError> {
        let value = value.into();
        ContactField::Phone.check(&value)?;
        self.phone = value;
        Ok(())
    }

    /// Replaces the address; the old value is kept on failure.
    pub fn set_address(
        &mut self,
        value: impl Into<String>,
    ) -> Result<(), ContactValidationError> {
        let value = value.into();
        ContactField::Address.check(&value)?;
        self.address = value;
        Ok(())
    }
}

/// Checks whether `value` would be accepted for `field`.
///
/// Used by callers that need to pre-validate a batch of values before
/// committing any of them.
pub fn validate_field(field: ContactField, value: &str) -> Result<(), ContactValidationError> {
    field.check(value)
}

// Empty stands in for a missing value. Length is measured in UTF-16 code
// units, so characters outside the BMP count twice.
fn is_bounded(value: &str, max_units: usize) -> bool {
    !value.is_empty() && value.encode_utf16().count() <= max_units
}
