//! Contact repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed CRUD storage for validated `Contact` records.
//! - Enforce ID-level invariants (uniqueness on insert, existence on
//!   mutation/removal).
//!
//! # Invariants
//! - Each key maps to exactly one contact, and `contact.id()` equals its key.
//! - Field validation is owned by `Contact`; the repository never re-checks
//!   field values.
//! - A failing call leaves stored state untouched.

use crate::model::contact::{Contact, ContactValidationError};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact directory operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A contact with this ID is already stored.
    DuplicateId(String),
    /// No contact is stored under this ID.
    NotFound(String),
    /// A field value was rejected by `Contact` validation.
    Validation(ContactValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "Contact ID already exists: {id}"),
            Self::NotFound(id) => write!(f, "Contact ID does not exist: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for keyed contact storage.
pub trait ContactRepository {
    /// Stores a new contact under its own ID.
    ///
    /// Fails with `DuplicateId` when the key is taken.
    fn insert_contact(&mut self, contact: Contact) -> RepoResult<()>;
    /// Gets one contact by ID.
    fn get_contact(&self, id: &str) -> Option<&Contact>;
    /// Gets one contact by ID for in-place mutation.
    fn get_contact_mut(&mut self, id: &str) -> RepoResult<&mut Contact>;
    /// Removes one contact and returns it.
    fn remove_contact(&mut self, id: &str) -> RepoResult<Contact>;
    /// Lists all contacts sorted by ID ascending.
    fn list_contacts(&self) -> Vec<&Contact>;
    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Returns whether a contact is stored under `id`.
    fn contains(&self, id: &str) -> bool {
        self.get_contact(id).is_some()
    }

    /// Returns whether the repository holds no contacts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// HashMap-backed contact repository.
///
/// Lives only as long as its owner; there is no persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryContactRepository {
    contacts: HashMap<String, Contact>,
}

impl MemoryContactRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for MemoryContactRepository {
    fn insert_contact(&mut self, contact: Contact) -> RepoResult<()> {
        if self.contacts.contains_key(contact.id()) {
            return Err(RepoError::DuplicateId(contact.id().to_string()));
        }
        self.contacts.insert(contact.id().to_string(), contact);
        Ok(())
    }

    fn get_contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    fn get_contact_mut(&mut self, id: &str) -> RepoResult<&mut Contact> {
        self.contacts
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    fn remove_contact(&mut self, id: &str) -> RepoResult<Contact> {
        self.contacts
            .remove(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    fn list_contacts(&self) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.contacts.values().collect();
        contacts.sort_by(|a, b| a.id().cmp(b.id()));
        contacts
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
