//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `contact_core` linkage.
//! - Exercise the directory with file logging enabled.
//!
//! Log directory: first argument, else `CONTACT_LOG_DIR`, else
//! `<temp>/contact_core`. It must be absolute.

use contact_core::{default_log_level, init_logging, ContactDirectory, RepoError};
use std::path::PathBuf;

const LOG_DIR_ENV: &str = "CONTACT_LOG_DIR";

fn main() -> Result<(), RepoError> {
    let log_dir = resolve_log_dir();
    match init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        Ok(()) => println!("contact_core logging dir={}", log_dir.display()),
        Err(err) => eprintln!("contact_core logging disabled: {err}"),
    }
    println!("contact_core version={}", contact_core::core_version());

    let mut directory = ContactDirectory::default();
    directory.add_contact("sample", "John", "Doe", "1234567890", "123 Main St")?;
    let duplicate = directory.add_contact("sample", "John", "Doe", "1234567890", "123 Main St");
    let sample = directory.delete_contact("sample")?;
    println!(
        "contact_core sample id={} duplicate_rejected={} roundtrip={}",
        sample.id(),
        matches!(duplicate, Err(RepoError::DuplicateId(_))),
        directory.get_contact("sample").is_none()
    );
    Ok(())
}

fn resolve_log_dir() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(LOG_DIR_ENV))
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("contact_core"))
}
