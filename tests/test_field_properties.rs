//! Property tests for field validation and record invariants.

use chrono::{Datelike, NaiveDate};
use contact_book::{AddPhoneOutcome, Birthday, PhoneNumber, Record};
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_phone_keeps_value(p in "[0-9]{10}") {
        let phone = PhoneNumber::new(p.clone()).unwrap();
        prop_assert_eq!(phone.as_str(), p.as_str());
    }

    #[test]
    fn wrong_length_phone_rejected(p in "[0-9]{0,9}|[0-9]{11,15}") {
        prop_assert!(PhoneNumber::new(p).is_err());
    }

    #[test]
    fn non_digit_phone_rejected(prefix in "[0-9]{0,9}", bad in "[^0-9]") {
        // Pad to ten characters so only the non-digit breaks the rule
        let mut raw = prefix;
        raw.push_str(&bad);
        while raw.chars().count() < 10 {
            raw.push('0');
        }
        prop_assert!(PhoneNumber::new(raw).is_err());
    }

    #[test]
    fn birthday_parses_and_renders_exact_date(
        y in 1900i32..2100,
        m in 1u32..=12,
        d in 1u32..=28,
    ) {
        let expected = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let raw = format!("{:04}.{:02}.{:02}", y, m, d);
        let birthday = Birthday::new(&raw).unwrap();
        prop_assert_eq!(birthday.date(), expected);
        prop_assert_eq!(Birthday::new(&birthday.to_string()).unwrap(), birthday);
    }

    #[test]
    fn birthday_with_wrong_year_width_rejected(
        year in "[0-9]{1,3}|[0-9]{5,6}",
        m in 1u32..=12,
        d in 1u32..=28,
    ) {
        let raw = format!("{}.{:02}.{:02}", year, m, d);
        prop_assert!(Birthday::new(&raw).is_err());
    }

    #[test]
    fn birthday_with_stray_prefix_rejected(
        field in 0usize..3,
        junk in "[ +\\-]{1,2}",
        y in 1900i32..2100,
        m in 1u32..=12,
        d in 1u32..=28,
    ) {
        let mut parts = [format!("{:04}", y), format!("{:02}", m), format!("{:02}", d)];
        parts[field].insert_str(0, &junk);
        prop_assert!(Birthday::new(&parts.join(".")).is_err());
    }

    #[test]
    fn days_to_birthday_within_a_year(
        y in 1950i32..2050,
        m in 1u32..=12,
        d in 1u32..=28,
        offset in 0i64..730,
    ) {
        let birthday = Birthday::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(offset);
        let days = birthday.days_until(today).unwrap();
        prop_assert!((0..=365).contains(&days));

        let next = today + chrono::Duration::days(days);
        prop_assert_eq!((next.month(), next.day()), (m, d));
    }

    #[test]
    fn add_phone_never_panics_and_grows_by_at_most_one(
        existing in proptest::collection::vec("[0-9]{10}", 0..5),
        input in ".{0,12}",
    ) {
        let mut record = Record::new("Anna").unwrap();
        for p in &existing {
            record.add_phone(p);
        }
        let before = record.phones().to_vec();

        let outcome = record.add_phone(&input);
        match outcome {
            AddPhoneOutcome::Added => {
                prop_assert_eq!(record.phones().len(), before.len() + 1);
                prop_assert_eq!(record.phones().last().unwrap().as_str(), input.as_str());
            }
            AddPhoneOutcome::Duplicate | AddPhoneOutcome::Rejected(_) => {
                prop_assert_eq!(record.phones(), before.as_slice());
            }
        }
    }
}
