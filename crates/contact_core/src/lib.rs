//! Core domain logic for the contact directory.
//! This crate is the single source of truth for contact invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, LoggingError};
pub use model::contact::{
    validate_field, Contact, ContactField, ContactValidationError, MAX_ADDRESS_CHARS,
    MAX_ID_CHARS, MAX_NAME_CHARS, PHONE_DIGITS,
};
pub use repo::contact_repo::{ContactRepository, MemoryContactRepository, RepoError, RepoResult};
pub use service::contact_service::{ContactService, ContactUpdate, UpdateMode};

/// Directory backed by the in-memory repository.
pub type ContactDirectory = ContactService<MemoryContactRepository>;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
