//! Shared record behaviour
//!
//! Every entity is keyed by a free-form string ID and serialises to a
//! fixed-arity CSV row. Managers compare IDs case-insensitively; record
//! equality itself is exact on the ID and ignores every other field.

use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Date format used for invoice sale dates (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("Invalid {kind} row: expected {expected} fields, got {found}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid {kind} {field}: '{value}' is not a number")]
    InvalidNumber {
        kind: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Invalid {kind} {field}: '{value}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate {
        kind: &'static str,
        field: &'static str,
        value: String,
    },
}

/// A storable entity with a string identity and a positional CSV form
pub trait Record: Clone {
    /// Lowercase entity name used in messages and logs
    const KIND: &'static str;

    /// Number of positional fields in the CSV row
    const FIELD_COUNT: usize;

    /// Returns the record's ID
    fn id(&self) -> &str;

    /// Serialises the record to its positional fields
    fn to_row(&self) -> Vec<String>;

    /// Parses a record from its positional fields
    fn from_row(fields: &[&str]) -> Result<Self, RecordError>;

    /// Returns true if the record's ID matches `id`, ignoring case
    fn has_id(&self, id: &str) -> bool {
        eq_ignore_case(self.id(), id)
    }
}

/// Case-insensitive string equality (Unicode aware)
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring test (Unicode aware)
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Typed accessor over the positional fields of one CSV row
pub(crate) struct Row<'a> {
    kind: &'static str,
    fields: &'a [&'a str],
}

impl<'a> Row<'a> {
    /// Checks the arity and wraps the fields
    pub(crate) fn new(
        kind: &'static str,
        expected: usize,
        fields: &'a [&'a str],
    ) -> Result<Self, RecordError> {
        if fields.len() != expected {
            return Err(RecordError::FieldCount {
                kind,
                expected,
                found: fields.len(),
            });
        }
        Ok(Self { kind, fields })
    }

    pub(crate) fn text(&self, index: usize) -> String {
        self.fields[index].trim().to_string()
    }

    pub(crate) fn number<N: FromStr>(
        &self,
        index: usize,
        field: &'static str,
    ) -> Result<N, RecordError> {
        let raw = self.fields[index].trim();
        raw.parse().map_err(|_| RecordError::InvalidNumber {
            kind: self.kind,
            field,
            value: raw.to_string(),
        })
    }

    pub(crate) fn date(&self, index: usize, field: &'static str) -> Result<NaiveDate, RecordError> {
        let raw = self.fields[index].trim();
        NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| RecordError::InvalidDate {
            kind: self.kind,
            field,
            value: raw.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_ignore_case_matches_mixed_case() {
        assert!(eq_ignore_case("p001", "P001"));
        assert!(eq_ignore_case("Đức", "đỨC"));
        assert!(!eq_ignore_case("P001", "P002"));
    }

    #[test]
    fn contains_ignore_case_is_substring() {
        assert!(contains_ignore_case("Samsung", "sung"));
        assert!(contains_ignore_case("Apple", ""));
        assert!(!contains_ignore_case("Oppo", "vivo"));
    }

    #[test]
    fn row_rejects_wrong_arity() {
        let fields = ["a", "b"];
        let err = Row::new("phone", 7, &fields).err().unwrap();
        assert_eq!(
            err,
            RecordError::FieldCount {
                kind: "phone",
                expected: 7,
                found: 2
            }
        );
    }

    #[test]
    fn row_parses_numbers_and_dates() {
        let fields = [" 42 ", "1.5", "2024-03-12"];
        let row = Row::new("invoice", 3, &fields).unwrap();

        assert_eq!(row.number::<i32>(0, "quantity").unwrap(), 42);
        assert_eq!(row.number::<f64>(1, "unit_price").unwrap(), 1.5);
        assert_eq!(
            row.date(2, "sale_date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
        );
    }

    #[test]
    fn row_reports_bad_number() {
        let fields = ["abc"];
        let row = Row::new("phone", 1, &fields).unwrap();
        let err = row.number::<i32>(0, "stock").unwrap_err();
        assert!(err.to_string().contains("'abc' is not a number"));
    }

    #[test]
    fn row_reports_bad_date() {
        let fields = ["12/03/2024"];
        let row = Row::new("invoice", 1, &fields).unwrap();
        assert!(matches!(
            row.date(0, "sale_date"),
            Err(RecordError::InvalidDate { .. })
        ));
    }
}
