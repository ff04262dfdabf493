//! Contact directory use-case service.
//!
//! # Responsibility
//! - Provide add/update/delete/get entry points keyed by contact ID.
//! - Check ID presence before any field validation runs.
//! - Emit metadata-only log events for every mutation.
//!
//! # Invariants
//! - Field validation is delegated to `Contact`; this layer only enforces
//!   ID-level rules.
//! - `update_contact` never changes a contact's ID.
//! - Sequential updates are not atomic: setters that ran before a failing
//!   one stay applied. `UpdateMode::Atomic` opts out of that.

use crate::model::contact::{validate_field, Contact, ContactField, ContactValidationError};
use crate::repo::contact_repo::{ContactRepository, RepoError, RepoResult};
use log::{debug, info, warn};

/// Replacement values for the four mutable contact fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
}

impl ContactUpdate {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}

/// How `update_contact_with` applies the four setters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Apply setters in order; stop at the first failure without rollback.
    #[default]
    Sequential,
    /// Validate every value first; apply only when all pass.
    Atomic,
}

/// Contact directory facade over a repository implementation.
#[derive(Debug, Default)]
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new contact.
    ///
    /// # Contract
    /// - Fails with `DuplicateId` before any field validation when `id` is
    ///   already present, even if the other values are invalid.
    /// - Fails with `Validation` (nothing stored) when a field is rejected.
    pub fn add_contact(
        &mut self,
        id: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
        address: &str,
    ) -> RepoResult<()> {
        if self.repo.contains(id) {
            warn!("event=contact_add module=directory status=error reason=duplicate_id");
            return Err(RepoError::DuplicateId(id.to_string()));
        }

        let contact = Contact::new(id, first_name, last_name, phone, address)
            .map_err(|err| log_rejected("contact_add", err.field(), err.into()))?;
        self.repo.insert_contact(contact)?;

        info!(
            "event=contact_add module=directory status=ok size={}",
            self.repo.len()
        );
        Ok(())
    }

    /// Removes a contact and returns it.
    pub fn delete_contact(&mut self, id: &str) -> RepoResult<Contact> {
        match self.repo.remove_contact(id) {
            Ok(removed) => {
                info!(
                    "event=contact_delete module=directory status=ok size={}",
                    self.repo.len()
                );
                Ok(removed)
            }
            Err(err) => {
                warn!("event=contact_delete module=directory status=error reason=not_found");
                Err(err)
            }
        }
    }

    /// Replaces the four mutable fields using `UpdateMode::Sequential`.
    ///
    /// Setters run in order first name, last name, phone, address. The first
    /// rejected value aborts the call; fields written before it keep their
    /// new values.
    pub fn update_contact(
        &mut self,
        id: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
        address: &str,
    ) -> RepoResult<()> {
        let update = ContactUpdate::new(first_name, last_name, phone, address);
        self.update_contact_with(id, &update, UpdateMode::Sequential)
    }

    /// Replaces the four mutable fields with an explicit update mode.
    ///
    /// Fails with `NotFound` (no entry created) when `id` is absent.
    pub fn update_contact_with(
        &mut self,
        id: &str,
        update: &ContactUpdate,
        mode: UpdateMode,
    ) -> RepoResult<()> {
        let contact = match self.repo.get_contact_mut(id) {
            Ok(contact) => contact,
            Err(err) => {
                warn!("event=contact_update module=directory status=error reason=not_found");
                return Err(err);
            }
        };

        if mode == UpdateMode::Atomic {
            for (field, value) in [
                (ContactField::FirstName, &update.first_name),
                (ContactField::LastName, &update.last_name),
                (ContactField::Phone, &update.phone),
                (ContactField::Address, &update.address),
            ] {
                validate_field(field, value)
                    .map_err(|err| log_rejected("contact_update", field, err.into()))?;
            }
        }

        apply_update(contact, update)
            .map_err(|err| log_rejected("contact_update", err.field(), err.into()))?;

        debug!(
            "event=contact_update module=directory status=ok mode={}",
            match mode {
                UpdateMode::Sequential => "sequential",
                UpdateMode::Atomic => "atomic",
            }
        );
        Ok(())
    }

    /// Gets one contact by ID; `None` when absent.
    pub fn get_contact(&self, id: &str) -> Option<&Contact> {
        self.repo.get_contact(id)
    }

    /// Lists all contacts sorted by ID ascending.
    pub fn list_contacts(&self) -> Vec<&Contact> {
        self.repo.list_contacts()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.repo.contains(id)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}

fn apply_update(
    contact: &mut Contact,
    update: &ContactUpdate,
) -> Result<(), ContactValidationError> {
    contact.set_first_name(update.first_name.as_str())?;
    contact.set_last_name(update.last_name.as_str())?;
    contact.set_phone(update.phone.as_str())?;
    contact.set_address(update.address.as_str())?;
    Ok(())
}

fn log_rejected(event: &str, field: ContactField, err: RepoError) -> RepoError {
    warn!(
        "event={event} module=directory status=error reason=invalid_field field={}",
        field.as_str()
    );
    err
}
