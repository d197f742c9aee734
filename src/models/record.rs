//! Record model representing one contact in the book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidatedField, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use std::fmt;

/// Result of [`Record::add_phone`].
///
/// Adding a phone never fails; the caller learns what happened from the
/// outcome instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPhoneOutcome {
    /// The number was appended to the end of the list.
    Added,

    /// The number was already on the record; nothing changed.
    Duplicate,

    /// The number failed validation; nothing changed.
    Rejected(ValidationError),
}

impl AddPhoneOutcome {
    /// Whether the phone list grew.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// A contact: a name, an ordered list of unique phone numbers and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::parse(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a record with a birthday in `YYYY.MM.DD` form.
    pub fn with_birthday(name: &str, birthday: &str) -> Result<Self, ValidationError> {
        let mut record = Self::new(name)?;
        record.add_birthday(birthday)?;
        Ok(record)
    }

    /// Assemble a record from already-validated parts.
    ///
    /// Repeated phone numbers are dropped, keeping the first occurrence.
    pub fn from_parts(
        name: ContactName,
        phones: impl IntoIterator<Item = PhoneNumber>,
        birthday: Option<Birthday>,
    ) -> Self {
        let mut unique: Vec<PhoneNumber> = Vec::new();
        for phone in phones {
            if !unique.contains(&phone) {
                unique.push(phone);
            }
        }
        Self {
            name,
            phones: unique,
            birthday,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number unless it is invalid or already present.
    ///
    /// Invalid input is logged as a warning and reported through
    /// [`AddPhoneOutcome::Rejected`]; the record is left unchanged.
    pub fn add_phone(&mut self, number: &str) -> AddPhoneOutcome {
        let phone = match PhoneNumber::parse(number) {
            Ok(phone) => phone,
            Err(e) => {
                tracing::warn!(
                    contact = %self.name,
                    phone = number,
                    "Error adding phone: {}",
                    e
                );
                return AddPhoneOutcome::Rejected(e);
            }
        };

        if self.phones.contains(&phone) {
            tracing::debug!(contact = %self.name, phone = number, "Phone already present");
            return AddPhoneOutcome::Duplicate;
        }

        self.phones.push(phone);
        AddPhoneOutcome::Added
    }

    /// Exact-match lookup, no normalization.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Replace `old` with `new` in place.
    ///
    /// If `new` is already on the record the edit is dropped and `old` stays.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not on the record
    /// - `BookError::Validation` if `new` is not a valid phone number
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        let replacement = PhoneNumber::parse(new)?;

        if self.phones.contains(&replacement) {
            tracing::debug!(
                contact = %self.name,
                old,
                new,
                "Edit dropped, new phone already present"
            );
            return Ok(());
        }

        self.phones[index] = replacement;
        Ok(())
    }

    /// Remove a phone number and hand it back.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `number` is not on the record.
    pub fn remove_phone(&mut self, number: &str) -> BookResult<PhoneNumber> {
        let index = self
            .position_of(number)
            .ok_or_else(|| BookError::PhoneNotFound(number.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Set or overwrite the birthday from `YYYY.MM.DD`.
    ///
    /// On a validation error the previous birthday (or its absence) is kept.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(birthday) => birthday.replace(value),
            None => {
                self.birthday = Some(Birthday::parse(value)?);
                Ok(())
            }
        }
    }

    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Days until the next birthday, counted from the local calendar date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; `Some(0)` on the day itself.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }

    /// Case-insensitive name substring or case-sensitive phone substring.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.as_str().to_lowercase().contains(&needle)
            || self.phones.iter().any(|p| p.as_str().contains(query))
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, ", self.name)?;
        if let Some(birthday) = &self.birthday {
            write!(f, "Birthday: {}, ", birthday)?;
        }
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "phones: {}", phones.join(", "))
    }
}
