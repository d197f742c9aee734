//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers and birthdays. Each value object is validated at
//! construction time so an invalid value can never be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::ValidatedField;
pub use name::ContactName;
pub use phone::{PhoneNumber, PHONE_DIGITS};
