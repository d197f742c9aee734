//! Validate-on-assign contract shared by every value object.

use super::errors::ValidationError;
use std::fmt::Display;

/// A scalar value that is checked against its rule on every write.
///
/// Values are only ever produced through [`ValidatedField::parse`], so an
/// instance that exists always satisfies its rule. Editing goes through
/// [`ValidatedField::replace`], which leaves the field untouched when the new
/// input is rejected.
pub trait ValidatedField: Sized + Display {
    /// Validate `raw` and build the field.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` when `raw` is not acceptable.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// Re-run validation on `raw` and swap the held value wholesale.
    fn replace(&mut self, raw: &str) -> Result<(), ValidationError> {
        *self = Self::parse(raw)?;
        Ok(())
    }
}
