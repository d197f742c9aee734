//! Sample records and books reused across integration tests.

use contact_book::{Directory, Record};

/// Create a record with the given phones and optional birthday.
///
/// Panics on invalid input; fixtures are expected to be valid.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = match birthday {
        Some(b) => Record::with_birthday(name, b).unwrap(),
        None => Record::new(name).unwrap(),
    };
    for phone in phones {
        assert!(record.add_phone(phone).is_added(), "fixture phone {phone} rejected");
    }
    record
}

/// A small book with a mix of phones and birthdays.
pub fn sample_book() -> Directory {
    vec![
        sample_record("Anna", &["0501234567", "0671112233"], Some("1990.05.17")),
        sample_record("Bob", &["0939876543"], None),
        sample_record("Joanne", &[], Some("2000.02.29")),
        sample_record("Dmytro", &["0443332211"], Some("1985.12.31")),
        sample_record("Eve", &["0501230000"], None),
    ]
    .into_iter()
    .collect()
}

/// Names in a slice of records, for compact assertions.
#[allow(dead_code)]
pub fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}
