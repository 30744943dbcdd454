//! Birth date parsing and validation.
//!
//! Only the strict `YYYY-MM-DD` shape is accepted, and the three numbers
//! must name a real Gregorian date. No clock or time zone is consulted.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated calendar date
///
/// Serialized as its `YYYY-MM-DD` string; deserializing runs the same
/// validation as `parse_birth_date`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate {
    year: u32,
    month: u32,
    day: u32,
}

impl BirthDate {
    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BirthDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_birth_date(s).ok_or_else(|| Error::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for BirthDate {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<BirthDate> for String {
    fn from(date: BirthDate) -> Self {
        date.to_string()
    }
}

/// Parse a `YYYY-MM-DD` string into a real calendar date
///
/// Returns `None` for any other shape (missing zero padding, extra
/// characters, surrounding whitespace) and for dates that do not exist
/// such as `2023-02-29` or `2023-04-31`.
pub fn parse_birth_date(input: &str) -> Option<BirthDate> {
    let bytes = input.as_bytes();
    if !input.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let year = parse_digits(&input[0..4])?;
    let month = parse_digits(&input[5..7])?;
    let day = parse_digits(&input[8..10])?;

    // chrono carries the leap-year and month-length rules
    NaiveDate::from_ymd_opt(year as i32, month, day)?;

    Some(BirthDate { year, month, day })
}

fn parse_digits(part: &str) -> Option<u32> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        let date = parse_birth_date("1990-07-15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1990, 7, 15));
        assert!(parse_birth_date("2024-02-29").is_some());
        assert!(parse_birth_date("2000-02-29").is_some());
        assert!(parse_birth_date("2023-12-31").is_some());
    }

    #[test]
    fn test_nonexistent_dates() {
        assert!(parse_birth_date("2023-02-29").is_none());
        assert!(parse_birth_date("1900-02-29").is_none());
        assert!(parse_birth_date("2023-04-31").is_none());
        assert!(parse_birth_date("2023-13-01").is_none());
        assert!(parse_birth_date("2023-00-10").is_none());
        assert!(parse_birth_date("2023-01-00").is_none());
        assert!(parse_birth_date("2023-01-32").is_none());
    }

    #[test]
    fn test_malformed_strings() {
        assert!(parse_birth_date("").is_none());
        assert!(parse_birth_date("1990-7-15").is_none());
        assert!(parse_birth_date("90-07-15").is_none());
        assert!(parse_birth_date("1990/07/15").is_none());
        assert!(parse_birth_date(" 1990-07-15").is_none());
        assert!(parse_birth_date("1990-07-15T00:00").is_none());
        assert!(parse_birth_date("1990-+7-15").is_none());
        assert!(parse_birth_date("１９９０-07-15").is_none());
    }

    #[test]
    fn test_from_str_reports_input() {
        let err = "2023-02-30".parse::<BirthDate>().unwrap_err();
        assert!(matches!(err, Error::InvalidDate(ref s) if s == "2023-02-30"));

        let date: BirthDate = "2024-02-29".parse().unwrap();
        assert_eq!(date.to_string(), "2024-02-29");
    }

    #[test]
    fn test_serde_validates() {
        let date: BirthDate = serde_json::from_str("\"0800-01-09\"").unwrap();
        assert_eq!(date.year(), 800);
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"0800-01-09\"");
        assert!(serde_json::from_str::<BirthDate>("\"2023-02-29\"").is_err());
    }
}
