//! Strict `dd/mm/yyyy` calendar dates and the due-date rules built on them.
//!
//! Dates cross the API boundary as strings but are parsed into a
//! [`CalendarDate`] before any comparison or arithmetic happens.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::error::{FaturaError, Result};

/// A calendar date rendered and parsed as `dd/mm/yyyy`.
///
/// Parsing never rolls over: `31/02/2022` is rejected instead of becoming
/// a date in March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year, month and day, `None` if it does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sun
    }

    /// Signed number of days from `self` to `later` (negative if `later` is earlier).
    pub fn days_until(&self, later: &CalendarDate) -> i64 {
        later.0.signed_duration_since(self.0).num_days()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = FaturaError;

    fn from_str(s: &str) -> Result<Self> {
        // chrono alone would take unpadded or signed fields
        let well_formed = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                2 | 5 => b == b'/',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(FaturaError::InvalidDate);
        }
        let date =
            NaiveDate::parse_from_str(s, "%d/%m/%Y").map_err(|_| FaturaError::InvalidDate)?;
        if date.year() < 1 {
            return Err(FaturaError::InvalidDate);
        }
        Ok(Self(date))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = FaturaError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// Parse a strict `dd/mm/yyyy` date.
pub fn parse_date(date: &str) -> Result<CalendarDate> {
    date.parse()
}

/// Whether `date` is a real calendar date in strict `dd/mm/yyyy` form.
///
/// ```
/// use fatura::core::is_valid_date;
///
/// assert!(is_valid_date("29/02/2024"));
/// assert!(!is_valid_date("29/02/2023"));
/// assert!(!is_valid_date("31/02/2022"));
/// ```
pub fn is_valid_date(date: &str) -> bool {
    parse_date(date).is_ok()
}

/// Whether `date` falls on a Sunday.
///
/// This is a query, not a validator: an unparsable date is simply not a Sunday.
pub fn is_sunday(date: &str) -> bool {
    parse_date(date).is_ok_and(|d| d.is_sunday())
}

/// Whether `later` is the same day as `earlier` or after it.
///
/// Malformed input is an error ([`FaturaError::InvalidDate`]), not `false`.
pub fn is_on_or_after(earlier: &str, later: &str) -> Result<bool> {
    let earlier = parse_date(earlier)?;
    let later = parse_date(later)?;
    Ok(earlier.days_until(&later) >= 0)
}
