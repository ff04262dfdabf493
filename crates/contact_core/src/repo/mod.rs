//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define keyed data access contracts for contacts.
//! - Keep storage details out of service orchestration.
//!
//! # Invariants
//! - Repositories only store values that already passed `Contact` validation.
//! - Repository APIs return semantic errors (`DuplicateId`, `NotFound`).

pub mod contact_repo;
