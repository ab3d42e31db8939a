//! Carddex demonstration driver.
//!
//! This binary is the external caller of the carddex core: it builds a few
//! records, exercises the phone and book CRUD operations, and prints the
//! resulting renderings to stdout.

use anyhow::Result;
use carddex::{AddressBook, Record};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout clean for the renderings)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Building address book");
    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    john.add_phone("7777777777")?;
    book.add_record(john);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("987-654-3210")?;
    jane.add_phone("9999999999")?;
    book.add_record(jane);

    println!("{}", book);

    // Invalid input is reported and the run continues.
    if let Err(e) = Record::new("Bob")?.add_phone("12345") {
        warn!("Rejected phone number: {}", e);
    }

    // Edit and remove on a registered record, via mutable lookup.
    if let Some(john) = book.find_mut("John") {
        john.edit_phone("7777777777", "1111111111")?;
        john.remove_phone("1234567890");

        match john.find_phone("5555555555") {
            Some(phone) => println!("Found phone for John: {}", phone),
            None => println!("No such phone for John"),
        }

        println!("{}", john);
    }

    info!(deleted = book.delete("Vasyl"), "Deleting Vasyl");
    info!(deleted = book.delete("John"), "Deleting John");

    println!("{}", book);

    Ok(())
}
