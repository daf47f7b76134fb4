// src/types/date_only.rs
//! Calendar dates in the API's `YYYY-MM-DD` wire format.

use super::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const WIRE_FORMAT: &str = "%Y-%m-%d";

/// A date without time or timezone, or the zero value.
///
/// The zero value stands for "no date": it is what `null`, an empty string
/// or an absent field decode to, it serializes back to `null`, and query
/// building treats it as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOnly(Option<NaiveDate>);

impl DateOnly {
    pub const ZERO: DateOnly = DateOnly(None);

    pub fn new(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    /// Builds a date from its parts, `None` when the parts are not a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    /// Parses `YYYY-MM-DD`. An empty string yields the zero value.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }
        NaiveDate::parse_from_str(trimmed, WIRE_FORMAT)
            .map(Self::new)
            .map_err(|_| ValidationError::InvalidDate {
                input: input.to_string(),
            })
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    pub fn year(&self) -> Option<i32> {
        self.0.map(|d| d.year())
    }

    pub fn month(&self) -> Option<u32> {
        self.0.map(|d| d.month())
    }

    pub fn day(&self) -> Option<u32> {
        self.0.map(|d| d.day())
    }

    /// Whole days from `self` to `later`; negative when `later` comes first.
    /// `None` if either side is zero.
    pub fn days_until(&self, later: &DateOnly) -> Option<i64> {
        match (self.0, later.0) {
            (Some(from), Some(to)) => Some((to - from).num_days()),
            _ => None,
        }
    }
}

impl From<NaiveDate> for DateOnly {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl fmt::Display for DateOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(WIRE_FORMAT)),
            None => Ok(()),
        }
    }
}

impl FromStr for DateOnly {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DateOnly {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(date) => serializer.serialize_str(&date.format(WIRE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for DateOnly {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::ZERO),
            Some(raw) => Self::parse(&raw).map_err(serde::de::Error::custom),
        }
    }
}
