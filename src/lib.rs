mod art;
mod consts;
mod prelude;
mod render;
mod types;

pub use art::{BANNER, DIGIT_GLYPHS, LABEL};
pub use consts::*;
pub use render::{RenderError, count_lines, render, write_countdown};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::fmt;
use std::io;
use std::str::FromStr;
use types::day_of_year;

/// A full calendar date used as the starting point of the countdown.
/// All components are validated at construction; an instance always
/// names a real Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountdownDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

impl fmt::Display for CountdownDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CountdownDate {
    /// Unreachable fallback for clock conversion: 0001-01-01
    const CLOCK_FALLBACK: Self = Self {
        year: types::Year::MIN,
        month: types::Month::MIN,
        day: types::Day::MIN,
    };

    /// Creates a new date from already validated components
    pub const fn new(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a new date from primitive components, validating each
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range for the
    /// Gregorian calendar.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_nz = types::Year::new(year)?;
        let month_nz = types::Month::new(month)?;
        let day_nz = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_nz,
            month: month_nz,
            day: day_nz,
        })
    }

    /// Today's date from the system clock.
    /// The clock value is clamped into the representable year range, so
    /// this never fails.
    pub fn today() -> Self {
        use chrono::Datelike;

        let now = chrono::Local::now().date_naive();
        let year = u16::try_from(now.year().clamp(1, i32::from(MAX_YEAR))).unwrap_or(MAX_YEAR);
        let month = u8::try_from(now.month()).unwrap_or(1);
        let day = u8::try_from(now.day()).unwrap_or(1);

        // Only reachable if clamping lands on an invalid combination,
        // e.g. February 29 of a year clamped into a non-leap year.
        Self::from_ymd(year, month, day).unwrap_or(Self::CLOCK_FALLBACK)
    }

    /// December 25 of the given year
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the year is out of range.
    pub fn christmas(year: u16) -> Result<Self, ParseError> {
        Self::from_ymd(year, DECEMBER, CHRISTMAS_DAY)
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Ordinal day within the year, `1..=366`
    pub const fn ordinal(&self) -> u16 {
        day_of_year(self.year.get(), self.month.get(), self.day.get())
    }

    /// Whole days from this date until December 25 of the same year.
    /// Dates past Christmas clamp to zero rather than going negative.
    pub const fn days_until_christmas(&self) -> u16 {
        let christmas = day_of_year(self.year.get(), DECEMBER, CHRISTMAS_DAY);
        christmas.saturating_sub(self.ordinal())
    }
}

impl FromStr for CountdownDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Strict ISO format: exactly YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {trimmed}",
                parts.len()
            )));
        }

        let year_u16 = parse_u16(parts[0])?;
        let month_u8 = parse_u8(parts[1])?;
        let day_u8 = parse_u8(parts[2])?;

        Self::from_ymd(year_u16, month_u8, day_u8)
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CountdownDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CountdownDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of resolving an optional start-date string.
/// Keeps the fail-soft fallback policy while making the fallback and
/// its cause inspectable instead of silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedStart {
    /// Caller-supplied start string parsed successfully
    Parsed(CountdownDate),
    /// No start string was given; the reference date is used
    Reference(CountdownDate),
    /// Start string failed to parse; the reference date is used
    FellBack {
        date: CountdownDate,
        cause: ParseError,
    },
}

impl ResolvedStart {
    /// The date the countdown starts from
    pub const fn date(&self) -> CountdownDate {
        match *self {
            Self::Parsed(date) | Self::Reference(date) | Self::FellBack { date, .. } => date,
        }
    }

    /// Returns true if a start string was supplied but rejected
    pub const fn fell_back(&self) -> bool {
        matches!(self, Self::FellBack { .. })
    }

    /// The parse failure that triggered the fallback, if any
    pub const fn cause(&self) -> Option<&ParseError> {
        match self {
            Self::FellBack { cause, .. } => Some(cause),
            Self::Parsed(_) | Self::Reference(_) => None,
        }
    }
}

/// Resolves an optional start-date string against a reference date.
/// A malformed string never surfaces an error; the reference date is
/// used instead and the cause is recorded on the returned value.
pub fn resolve_start(start: Option<&str>, reference: CountdownDate) -> ResolvedStart {
    match start {
        None => ResolvedStart::Reference(reference),
        Some(s) => match s.parse::<CountdownDate>() {
            Ok(date) => ResolvedStart::Parsed(date),
            Err(cause) => {
                tracing::warn!(start = s, error = %cause, "invalid start date, using reference date");
                ResolvedStart::FellBack {
                    date: reference,
                    cause,
                }
            }
        },
    }
}

/// Days remaining until Christmas of the resolved start date's year.
/// Equivalent to resolving `start` against `reference` and counting
/// whole days to December 25, clamped at zero.
pub fn days_remaining(start: Option<&str>, reference: CountdownDate) -> u16 {
    resolve_start(start, reference).date().days_until_christmas()
}

/// Prints the full countdown to standard output: banner art, the day
/// count as large digits, and the label, each line indented by `indent`
/// spaces. The clock is read only to build the reference date.
///
/// Returns how the start date was resolved, so callers can detect a
/// fallback.
///
/// # Errors
/// Returns `RenderError` if writing to standard output fails.
pub fn get_days(start: Option<&str>, indent: usize) -> Result<ResolvedStart, RenderError> {
    let resolved = resolve_start(start, CountdownDate::today());
    let days = resolved.date().days_until_christmas();
    tracing::debug!(start = %resolved.date(), days, "rendering countdown");

    let mut stdout = io::stdout().lock();
    render::write_countdown(&mut stdout, days, indent)?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CountdownDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_iso_full_date() {
        let parsed = date("1991-08-15");
        assert_eq!(parsed.year(), 1991);
        assert_eq!(parsed.month(), 8);
        assert_eq!(parsed.day(), 15);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let parsed = date(" 1991 - 08 - 15 ");
        assert_eq!(parsed.year(), 1991);
        assert_eq!(parsed.month(), 8);
        assert_eq!(parsed.day(), 15);
    }

    #[test]
    fn test_parse_unpadded_components() {
        let parsed = date("1900-1-31");
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (1900, 1, 31));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(
            "1991".parse::<CountdownDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-08".parse::<CountdownDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-08-15-23".parse::<CountdownDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "08/15/1991".parse::<CountdownDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "not-a-date".parse::<CountdownDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            "".parse::<CountdownDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "   ".parse::<CountdownDate>(),
            Err(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_invalid_components() {
        assert!(matches!(
            "2022-13-40".parse::<CountdownDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            "2022-02-30".parse::<CountdownDate>(),
            Err(ParseError::InvalidDay {
                year: 2022,
                month: 2,
                day: 30
            })
        ));
        assert!(matches!(
            "0-01-01".parse::<CountdownDate>(),
            Err(ParseError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_parse_leap_day() {
        assert!("2020-02-29".parse::<CountdownDate>().is_ok());
        assert!("2021-02-29".parse::<CountdownDate>().is_err());
        // 1900 is not a leap year (divisible by 100 but not 400)
        assert!("1900-02-29".parse::<CountdownDate>().is_err());
        assert!("2000-02-29".parse::<CountdownDate>().is_ok());
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(date("1991-08-15").to_string(), "1991-08-15");
        assert_eq!(date("5-1-2").to_string(), "0005-01-02");
    }

    #[test]
    fn test_ordering() {
        assert!(date("2022-12-24") < date("2022-12-25"));
        assert!(date("2022-01-31") < date("2022-02-01"));
        assert!(date("2021-12-31") < date("2022-01-01"));
    }

    #[test]
    fn test_days_until_christmas_cases() {
        struct TestCase {
            start: &'static str,
            days: u16,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start: "2022-12-20",
                days: 5,
                description: "five days out",
            },
            TestCase {
                start: "2022-12-25",
                days: 0,
                description: "Christmas day itself",
            },
            TestCase {
                start: "2022-12-26",
                days: 0,
                description: "already passed, clamped",
            },
            TestCase {
                start: "2022-12-31",
                days: 0,
                description: "year end, clamped",
            },
            TestCase {
                start: "2022-01-01",
                days: 358,
                description: "new year's day, non-leap",
            },
            TestCase {
                start: "2024-01-01",
                days: 359,
                description: "new year's day, leap",
            },
            TestCase {
                start: "2024-02-28",
                days: 301,
                description: "before leap day",
            },
            TestCase {
                start: "2024-03-01",
                days: 299,
                description: "after leap day",
            },
        ];

        for case in &cases {
            assert_eq!(
                date(case.start).days_until_christmas(),
                case.days,
                "{} ({})",
                case.start,
                case.description
            );
        }
    }

    #[test]
    fn test_christmas_constructor() {
        let christmas = CountdownDate::christmas(2022).unwrap();
        assert_eq!(christmas.to_string(), "2022-12-25");
        assert_eq!(christmas.days_until_christmas(), 0);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(date("2022-01-01").ordinal(), 1);
        assert_eq!(date("2022-12-25").ordinal(), 359);
        assert_eq!(date("2024-12-25").ordinal(), 360);
    }

    #[test]
    fn test_resolve_start_parsed() {
        let reference = date("2022-06-01");
        let resolved = resolve_start(Some("2022-12-20"), reference);
        assert_eq!(resolved, ResolvedStart::Parsed(date("2022-12-20")));
        assert!(!resolved.fell_back());
        assert_eq!(resolved.cause(), None);
        assert_eq!(resolved.date().days_until_christmas(), 5);
    }

    #[test]
    fn test_resolve_start_reference() {
        let reference = date("2022-06-01");
        let resolved = resolve_start(None, reference);
        assert_eq!(resolved, ResolvedStart::Reference(reference));
        assert!(!resolved.fell_back());
        assert_eq!(resolved.date(), reference);
    }

    #[test]
    fn test_resolve_start_falls_back_on_malformed_input() {
        let reference = date("2022-06-01");

        for bad in ["not-a-date", "2022-13-40", "", "2022/12/20"] {
            let resolved = resolve_start(Some(bad), reference);
            assert!(resolved.fell_back(), "input {bad:?} should fall back");
            assert_eq!(resolved.date(), reference, "input {bad:?}");
            assert!(resolved.cause().is_some(), "input {bad:?}");
        }
    }

    #[test]
    fn test_resolve_start_records_cause() {
        let reference = date("2022-06-01");
        let resolved = resolve_start(Some("2022-13-40"), reference);
        assert_eq!(resolved.cause(), Some(&ParseError::InvalidMonth(13)));
    }

    #[test]
    fn test_days_remaining() {
        let reference = date("2022-12-24");
        assert_eq!(days_remaining(Some("2022-12-20"), reference), 5);
        assert_eq!(days_remaining(None, reference), 1);
        assert_eq!(days_remaining(Some("garbage"), reference), 1);
        assert_eq!(days_remaining(Some("2022-12-26"), reference), 0);
    }

    #[test]
    fn test_today_is_valid() {
        // Whatever the clock says, the result is a real date that counts
        // down without panicking.
        let today = CountdownDate::today();
        assert!((1..=366).contains(&today.ordinal()));
        let _ = today.days_until_christmas();
    }

    #[test]
    fn test_serde_string_format() {
        let parsed = date("2022-12-20");
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#""2022-12-20""#);

        let restored: CountdownDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, restored);
    }

    #[test]
    fn test_serde_validation() {
        // Invalid month should be rejected
        let result: Result<CountdownDate, _> = serde_json::from_str(r#""2024-13-01""#);
        assert!(result.is_err());

        // Invalid day for February should be rejected
        let result: Result<CountdownDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        // Valid leap day should succeed
        let result: Result<CountdownDate, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                year: 2022,
                month: 2,
                day: 30
            }
            .to_string(),
            "Invalid day 30 for month 2022-02"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }
}
