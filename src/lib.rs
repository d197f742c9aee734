//! Contact Book - a personal address book with validated fields.
//!
//! Records hold a name, an ordered list of unique 10-digit phone numbers and
//! an optional birthday. The [`Directory`] keeps records keyed by name in
//! insertion order, supports substring search and batched iteration, and
//! persists itself as a versioned JSON snapshot.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact `Record`
//! - **directory**: The address book, batch iterator and snapshot encoding
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use contact_book::{Directory, Record};
//!
//! let mut anna = Record::with_birthday("Anna", "1990.05.17").unwrap();
//! anna.add_phone("0501234567");
//!
//! let mut book = Directory::new();
//! book.add_record(anna);
//!
//! assert_eq!(book.search("ann").len(), 1);
//! assert_eq!(book.search("1234").len(), 1);
//! ```

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use directory::{Batches, Directory, LoadStatus, DEFAULT_BATCH_SIZE};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidatedField, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{AddPhoneOutcome, Record};
