//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into directory-level APIs.
//! - Keep callers decoupled from storage details.

pub mod contact_service;
