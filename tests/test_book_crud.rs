//! End-to-end tests for address book CRUD operations.
//!
//! These tests validate creating, reading, updating, and deleting contact
//! records in the book, plus the book-level rendering and serde behavior.

use carddex::{AddressBook, Record};

fn record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(*phone).unwrap();
    }
    record
}

/// Test complete CRUD cycle for records: Create, Read, Update, Delete.
///
/// This test validates:
/// - Records can be added and retrieved by name
/// - A registered record can be edited in place via `find_mut`
/// - Deleting an absent name is a no-op returning false
/// - Deleting a present name removes the record and all its phones
/// - The final book rendering contains only the surviving record
#[test]
fn test_book_crud_lifecycle() {
    let mut book = AddressBook::new();

    book.add_record(record_with_phones(
        "John",
        &["1234567890", "5555555555", "7777777777"],
    ));
    book.add_record(record_with_phones("Jane", &["9876543210", "9999999999"]));
    assert_eq!(book.len(), 2);

    let john = book.find_mut("John").expect("John should be registered");
    john.edit_phone("7777777777", "1111111111").unwrap();
    assert!(john.remove_phone("1234567890"));
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 5555555555; 1111111111"
    );

    assert!(!book.delete("Vasyl"));
    assert!(book.delete("John"));

    assert_eq!(
        book.to_string(),
        "Contact name: Jane, phones: 9876543210; 9999999999"
    );
}

/// Test that adding under an existing name replaces the prior record.
///
/// This test validates:
/// - The second add does not grow the book
/// - `find` returns the second record's phones, not the first's
/// - The replacement is destructive, not a merge
#[test]
fn test_add_record_overwrites_by_name() {
    let mut book = AddressBook::new();

    book.add_record(record_with_phones("John", &["1234567890", "5555555555"]));
    book.add_record(record_with_phones("John", &["9999999999"]));

    assert_eq!(book.len(), 1);
    let phones: Vec<&str> = book
        .find("John")
        .unwrap()
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect();
    assert_eq!(phones, vec!["9999999999"]);
}

/// Test lookup semantics for present and absent names.
///
/// This test validates:
/// - `find` matches exact name text only
/// - Absent names yield None rather than an error
#[test]
fn test_find_is_exact_text() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("John", &[]));

    assert!(book.find("John").is_some());
    assert!(book.find("john").is_none());
    assert!(book.find("John ").is_none());
    assert!(book.find("Jane").is_none());
}

/// Test book rendering across sizes.
///
/// This test validates:
/// - An empty book renders as the empty string
/// - Multiple records render one line each, newline-joined, in name order
#[test]
fn test_book_rendering() {
    let mut book = AddressBook::new();
    assert_eq!(book.to_string(), "");

    book.add_record(record_with_phones("John", &["1234567890"]));
    book.add_record(record_with_phones("Jane", &["9876543210"]));

    assert_eq!(
        book.to_string(),
        "Contact name: Jane, phones: 9876543210\nContact name: John, phones: 1234567890"
    );
}

/// Test JSON round trip of a populated book.
///
/// This test validates:
/// - The book serializes as a sequence of records
/// - Deserialization re-keys every record by its name
/// - The restored book equals the original
#[test]
fn test_book_serde_round_trip() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("John", &["5555555555", "1111111111"]));
    book.add_record(record_with_phones("Jane", &["9876543210"]));

    let json = serde_json::to_string(&book).unwrap();
    let restored: AddressBook = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, book);
    assert_eq!(restored.find("John").unwrap().phones().len(), 2);
}
