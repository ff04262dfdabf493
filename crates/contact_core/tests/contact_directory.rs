use contact_core::{
    Contact, ContactDirectory, ContactField, ContactRepository, ContactService, ContactUpdate,
    MemoryContactRepository, RepoError, RepoResult, UpdateMode,
};
use std::collections::BTreeMap;
use std::error::Error;

const ID: &str = "1234567890";

fn directory_with_john() -> ContactDirectory {
    let mut directory = ContactDirectory::default();
    directory
        .add_contact(ID, "John", "Doe", "1234567890", "123 Main St")
        .unwrap();
    directory
}

#[test]
fn add_and_get_roundtrip() {
    let directory = directory_with_john();

    let contact = directory.get_contact(ID).unwrap();
    assert_eq!(contact.id(), ID);
    assert_eq!(contact.first_name(), "John");
    assert_eq!(contact.last_name(), "Doe");
    assert_eq!(contact.phone(), "1234567890");
    assert_eq!(contact.address(), "123 Main St");
}

#[test]
fn get_is_repeatable_without_mutation() {
    let directory = directory_with_john();

    let first = directory.get_contact(ID).cloned();
    let second = directory.get_contact(ID).cloned();
    assert_eq!(first, second);
    assert!(directory.get_contact("missing").is_none());
}

#[test]
fn add_duplicate_fails_and_keeps_original() {
    let mut directory = directory_with_john();

    let err = directory
        .add_contact(ID, "Jane", "Smith", "0987654321", "456 Oak Ave")
        .unwrap_err();
    assert_eq!(err, RepoError::DuplicateId(ID.to_string()));
    assert_eq!(err.to_string(), "Contact ID already exists: 1234567890");
    assert_eq!(directory.get_contact(ID).unwrap().first_name(), "John");
    assert_eq!(directory.len(), 1);
}

#[test]
fn add_duplicate_is_reported_before_field_validation() {
    let mut directory = directory_with_john();

    let err = directory.add_contact(ID, "", "", "bad", "").unwrap_err();
    assert!(matches!(err, RepoError::DuplicateId(id) if id == ID));
}

#[test]
fn add_invalid_contact_stores_nothing() {
    let mut directory = ContactDirectory::default();

    let err = directory
        .add_contact("42", "John", "Doe", "12345", "123 Main St")
        .unwrap_err();
    match &err {
        RepoError::Validation(inner) => assert_eq!(inner.field(), ContactField::Phone),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.source().is_some());
    assert!(directory.get_contact("42").is_none());
    assert!(directory.is_empty());
}

#[test]
fn delete_removes_contact() {
    let mut directory = directory_with_john();

    let removed = directory.delete_contact(ID).unwrap();
    assert_eq!(removed.first_name(), "John");
    assert!(directory.get_contact(ID).is_none());
    assert!(!directory.contains(ID));
}

#[test]
fn delete_missing_returns_not_found() {
    let mut directory = ContactDirectory::default();

    let err = directory.delete_contact(ID).unwrap_err();
    assert_eq!(err, RepoError::NotFound(ID.to_string()));
    assert_eq!(err.to_string(), "Contact ID does not exist: 1234567890");
}

#[test]
fn update_existing_contact() {
    let mut directory = directory_with_john();

    directory
        .update_contact(ID, "Jane", "Smith", "0987654321", "456 Oak Ave")
        .unwrap();

    let contact = directory.get_contact(ID).unwrap();
    assert_eq!(contact.id(), ID);
    assert_eq!(contact.first_name(), "Jane");
    assert_eq!(contact.last_name(), "Smith");
    assert_eq!(contact.phone(), "0987654321");
    assert_eq!(contact.address(), "456 Oak Ave");
}

#[test]
fn update_missing_returns_not_found_and_creates_nothing() {
    let mut directory = ContactDirectory::default();

    let err = directory
        .update_contact(ID, "Jane", "Smith", "0987654321", "456 Oak Ave")
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == ID));
    assert!(directory.get_contact(ID).is_none());
    assert!(directory.is_empty());
}

#[test]
fn update_with_invalid_first_name_leaves_contact_unchanged() {
    let mut directory = directory_with_john();

    let err = directory
        .update_contact(ID, "Johnathannn", "Doe", "1234567890", "123 Main St")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "First name must not be null and must be 10 characters or less"
    );

    let contact = directory.get_contact(ID).unwrap();
    assert_eq!(contact.first_name(), "John");
    assert_eq!(contact.last_name(), "Doe");
    assert_eq!(contact.phone(), "1234567890");
    assert_eq!(contact.address(), "123 Main St");
}

#[test]
fn sequential_update_keeps_fields_applied_before_failure() {
    let mut directory = directory_with_john();

    let err = directory
        .update_contact(ID, "Jane", "Smith", "not-digits", "456 Oak Ave")
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ref inner) if inner.field() == ContactField::Phone
    ));

    let contact = directory.get_contact(ID).unwrap();
    assert_eq!(contact.first_name(), "Jane");
    assert_eq!(contact.last_name(), "Smith");
    assert_eq!(contact.phone(), "1234567890");
    assert_eq!(contact.address(), "123 Main St");
}

#[test]
fn atomic_update_applies_nothing_on_failure() {
    let mut directory = directory_with_john();
    let update = ContactUpdate::new("Jane", "Smith", "0987654321", "");

    let err = directory
        .update_contact_with(ID, &update, UpdateMode::Atomic)
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ref inner) if inner.field() == ContactField::Address
    ));

    let contact = directory.get_contact(ID).unwrap();
    assert_eq!(contact.first_name(), "John");
    assert_eq!(contact.last_name(), "Doe");
    assert_eq!(contact.phone(), "1234567890");
    assert_eq!(contact.address(), "123 Main St");
}

#[test]
fn atomic_update_applies_all_on_success() {
    let mut directory = directory_with_john();
    let update = ContactUpdate::new("Jane", "Smith", "0987654321", "456 Oak Ave");

    directory
        .update_contact_with(ID, &update, UpdateMode::Atomic)
        .unwrap();

    let contact = directory.get_contact(ID).unwrap();
    assert_eq!(contact.first_name(), "Jane");
    assert_eq!(contact.address(), "456 Oak Ave");
}

#[test]
fn full_lifecycle_scenario() {
    let mut directory = directory_with_john();
    assert_eq!(directory.get_contact(ID).unwrap().last_name(), "Doe");

    assert!(matches!(
        directory.add_contact(ID, "John", "Doe", "1234567890", "123 Main St"),
        Err(RepoError::DuplicateId(_))
    ));

    directory.delete_contact(ID).unwrap();
    assert!(directory.get_contact(ID).is_none());

    assert!(matches!(
        directory.update_contact(ID, "Jane", "Smith", "0987654321", "456 Oak Ave"),
        Err(RepoError::NotFound(_))
    ));
}

#[test]
fn list_contacts_is_sorted_by_id() {
    let mut directory = ContactService::new(MemoryContactRepository::new());
    for id in ["b2", "a1", "c3"] {
        directory
            .add_contact(id, "John", "Doe", "1234567890", "123 Main St")
            .unwrap();
    }

    let ids: Vec<&str> = directory
        .list_contacts()
        .into_iter()
        .map(|contact| contact.id())
        .collect();
    assert_eq!(ids, vec!["a1", "b2", "c3"]);
}

#[test]
fn separate_directories_do_not_share_state() {
    let first = directory_with_john();
    let second = ContactDirectory::default();

    assert!(first.contains(ID));
    assert!(!second.contains(ID));
}

#[test]
fn service_works_over_custom_repository() {
    let mut directory = ContactService::new(OrderedRepository::default());
    directory
        .add_contact("x", "John", "Doe", "1234567890", "123 Main St")
        .unwrap();

    assert!(matches!(
        directory.add_contact("x", "John", "Doe", "1234567890", "123 Main St"),
        Err(RepoError::DuplicateId(_))
    ));
    directory
        .update_contact("x", "Jane", "Doe", "1234567890", "123 Main St")
        .unwrap();
    assert_eq!(directory.get_contact("x").unwrap().first_name(), "Jane");
    assert_eq!(directory.delete_contact("x").unwrap().id(), "x");
    assert!(directory.is_empty());
}

#[derive(Default)]
struct OrderedRepository {
    contacts: BTreeMap<String, Contact>,
}

impl ContactRepository for OrderedRepository {
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
        self.contacts.values().collect()
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

#[test]
fn directory_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContactDirectory>();
}
