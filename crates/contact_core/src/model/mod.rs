//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record used by directory logic.
//! - Own all field-level validation rules.
//!
//! # Invariants
//! - Every contact is identified by a caller-provided, immutable ID.
//! - No `Contact` value can be observed with an invalid field.

pub mod contact;
