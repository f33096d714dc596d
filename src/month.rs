use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(value, DAY_FORMAT)
        .ok()
        .filter(|date| YEARS.contains(&date.year()))
}

const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// A calendar month, written canonically as `YYYY-MM`.
///
/// Ordering is chronological (year first, then month), which matches the
/// lexicographic order of the canonical text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthKeyError {
    pub value: String,
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid month key '{}', expected YYYY-MM", self.value)
    }
}

impl std::error::Error for MonthKeyError {}

impl MonthKey {
    pub const MIN: MonthKey = MonthKey { year: 1, month: 1 };
    pub const MAX: MonthKey = MonthKey { year: 9999, month: 12 };

    pub fn new(year: i32, month: u32) -> Option<Self> {
        if YEARS.contains(&year) && (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Shifts by a signed number of calendar months. The result is only
    /// parseable again while it stays within `MIN..=MAX`.
    pub fn offset(self, months: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn prev(self) -> Self {
        self.offset(-1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let err = || MonthKeyError {
            value: value.to_string(),
        };
        let (year, month) = value.split_once('-').ok_or_else(err)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(err());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let year = year.parse::<i32>().map_err(|_| err())?;
        let month = month.parse::<u32>().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> MonthKey {
        value.parse().unwrap()
    }

    #[test]
    fn parses_and_formats_canonical_form() {
        let month = key("2024-03");
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2024-03");
        assert_eq!(MonthKey::new(7, 1).unwrap().to_string(), "0007-01");
    }

    #[test]
    fn rejects_malformed_keys() {
        for raw in ["2024-3", "24-03", "2024-13", "2024-00", "2024/03", "2024-03-01", "", "abcd-ef", "+024-03"] {
            assert!(raw.parse::<MonthKey>().is_err(), "accepted {raw}");
        }
    }

    #[test]
    fn offset_crosses_year_boundaries() {
        assert_eq!(key("2024-01").prev(), key("2023-12"));
        assert_eq!(key("2023-12").next(), key("2024-01"));
        assert_eq!(key("2024-03").offset(-11), key("2023-04"));
        assert_eq!(key("2024-03").offset(25), key("2026-04"));
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(key("2023-12") < key("2024-01"));
        assert!(key("2024-02") < key("2024-10"));
    }

    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&key("2025-02")).unwrap();
        assert_eq!(json, "\"2025-02\"");
        let parsed: MonthKey = serde_json::from_str("\"2025-11\"").unwrap();
        assert_eq!(parsed, key("2025-11"));
        assert!(serde_json::from_str::<MonthKey>("\"2025-1\"").is_err());
    }

    #[test]
    fn parse_day_requires_full_date() {
        assert_eq!(parse_day("2025-04-01"), NaiveDate::from_ymd_opt(2025, 4, 1));
        assert_eq!(parse_day("2025-4-1"), None);
        assert_eq!(parse_day("04/01/2025"), None);
        assert_eq!(parse_day("2025-02-30"), None);
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("0000-01-01"), None);
    }

    #[test]
    fn from_date_drops_day() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 31).unwrap();
        assert_eq!(MonthKey::from_date(date), Some(key("2026-07")));
        let year_zero = NaiveDate::from_ymd_opt(0, 5, 1).unwrap();
        assert_eq!(MonthKey::from_date(year_zero), None);
    }
}
