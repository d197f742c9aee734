//! Birthday value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are entered, rendered and stored in.
pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

/// A calendar date parsed from `YYYY.MM.DD`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("1990.05.17").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
/// assert_eq!(birthday.to_string(), "1990.05.17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `YYYY.MM.DD`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// the format or names a date that does not exist (month 13, Feb 30, ...).
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !Self::has_entry_shape(value) {
            return Err(ValidationError::InvalidBirthday {
                value: value.to_string(),
                reason: "expected four year digits and one or two month/day digits".to_string(),
            });
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|e| ValidationError::InvalidBirthday {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// `YYYY.M[M].D[D]` with ASCII digits only.
    ///
    /// chrono alone also takes short or signed years and padded fields.
    fn has_entry_shape(value: &str) -> bool {
        let digits = |part: &str, min: usize, max: usize| {
            (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        let mut parts = value.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(year), Some(month), Some(day), None) => {
                digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
            }
            _ => false,
        }
    }

    /// Wrap an already-valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Date this birthday is observed in `year`.
    ///
    /// A Feb 29 birthday is observed on Mar 1 in non-leap years. Returns
    /// `None` only when `year` is outside the supported calendar range.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// First observed birthday on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.observed_in(today.year())?;
        if today > this_year {
            self.observed_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Whole calendar days from `today` until the next birthday (0 on the day).
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| next.signed_duration_since(today).num_days())
    }
}

impl ValidatedField for Birthday {
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }
}

// Serde support - serialize in the entry format so snapshots stay readable
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_parses_exact_date() {
        let birthday = Birthday::new("2001.12.31").unwrap();
        assert_eq!(birthday.date(), date(2001, 12, 31));
    }

    #[test]
    fn test_birthday_rejects_bad_input() {
        assert!(Birthday::new("1990.13.01").is_err());
        assert!(Birthday::new("2023.02.30").is_err());
        assert!(Birthday::new("2023.02.29").is_err());
        assert!(Birthday::new("1990-05-17").is_err());
        assert!(Birthday::new("17.05.1990").is_err());
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1990.05.17 extra").is_err());
    }

    #[test]
    fn test_birthday_rejects_loose_shapes() {
        for raw in [
            "99.5.7",
            "990.05.17",
            "19900.05.17",
            " 1990.05.17",
            "1990. 05.17",
            "1990.05. 7",
            "+1990.05.17",
            "-001.01.01",
            "1990.005.17",
            "1990.05.17.",
            "1990..05.17",
        ] {
            assert!(
                matches!(
                    Birthday::new(raw),
                    Err(ValidationError::InvalidBirthday { .. })
                ),
                "expected '{}' to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_birthday_accepts_unpadded_month_and_day() {
        assert_eq!(Birthday::new("1990.5.7").unwrap().date(), date(1990, 5, 7));
    }

    #[test]
    fn test_birthday_accepts_leap_day() {
        assert_eq!(Birthday::new("2000.02.29").unwrap().date(), date(2000, 2, 29));
    }

    #[test]
    fn test_birthday_render_reparse() {
        let birthday = Birthday::new("1985.01.09").unwrap();
        let rendered = birthday.to_string();
        assert_eq!(rendered, "1985.01.09");
        assert_eq!(Birthday::new(&rendered).unwrap(), birthday);
    }

    #[test]
    fn test_days_until_today_is_zero() {
        let birthday = Birthday::new("1990.10.14").unwrap();
        assert_eq!(birthday.days_until(date(2026, 10, 14)), Some(0));
    }

    #[test]
    fn test_days_until_tomorrow_is_one() {
        let birthday = Birthday::new("1990.10.15").unwrap();
        assert_eq!(birthday.days_until(date(2026, 10, 14)), Some(1));
    }

    #[test]
    fn test_days_until_passed_rolls_to_next_year() {
        let birthday = Birthday::new("1990.10.13").unwrap();
        // 2027 is not a leap year: 365 - 1 days
        assert_eq!(birthday.days_until(date(2026, 10, 14)), Some(364));
    }

    #[test]
    fn test_leap_day_observed_on_march_first() {
        let birthday = Birthday::new("2000.02.29").unwrap();
        assert_eq!(birthday.observed_in(2027), Some(date(2027, 3, 1)));
        assert_eq!(birthday.observed_in(2028), Some(date(2028, 2, 29)));
        assert_eq!(birthday.days_until(date(2027, 2, 28)), Some(1));
        assert_eq!(birthday.days_until(date(2027, 3, 1)), Some(0));
    }

    #[test]
    fn test_leap_day_after_observance_rolls_over() {
        let birthday = Birthday::new("2000.02.29").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2027, 3, 2)),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("1990.05.17").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"1990.05.17\"");
        let back: Birthday = serde_json::from_str("\"1990.05.17\"").unwrap();
        assert_eq!(back, birthday);
    }
}
