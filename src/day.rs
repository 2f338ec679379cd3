use std::{fmt, str::FromStr};

use crate::{
    civil::{civil_from_days, days_from_civil, days_in_month},
    consts::{DATE_SEPARATOR, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR},
    prelude::*,
};

/// A single calendar day with no time component.
///
/// Stored as a day index counted from 1970-01-01, so ordering is chronological
/// and stepping to a neighbouring day is integer arithmetic. Only years
/// `MIN_YEAR..=MAX_YEAR` are representable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct CalendarDay(i32);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Not a YYYY-MM-DD calendar day: {_0}")]
    InvalidFormat(String),
    /// Years outside four-digit ISO form cannot be booked.
    #[display(fmt = "Year {} cannot be booked (four-digit years {}-{} only)", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Month {} does not exist (expected 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "{year}-{month:02} has no day {day}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Day index {_0} falls outside the bookable calendar")]
    OutOfRange(i64),
    #[display(fmt = "No calendar day given")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDay {
    /// First supported day, `0001-01-01`
    pub const MIN: Self = Self(days_from_civil(MIN_YEAR, 1, 1));
    /// Last supported day, `9999-12-31`
    pub const MAX: Self = Self(days_from_civil(MAX_YEAR, MAX_MONTH, 31));

    /// Creates a day from its calendar components.
    ///
    /// # Errors
    /// Returns the `DateError` variant naming the first invalid component.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self(days_from_civil(year, month, day)))
    }

    /// Creates a day from its index (days since 1970-01-01).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` outside `MIN..=MAX`.
    pub fn from_index(index: i64) -> Result<Self, DateError> {
        let narrow = i32::try_from(index).map_err(|_| DateError::OutOfRange(index))?;
        if narrow < Self::MIN.0 || narrow > Self::MAX.0 {
            return Err(DateError::OutOfRange(index));
        }
        Ok(Self(narrow))
    }

    /// Days since 1970-01-01
    #[inline]
    pub const fn index(self) -> i32 {
        self.0
    }

    pub const fn ymd(self) -> (u16, u8, u8) {
        civil_from_days(self.0)
    }

    pub const fn year(self) -> u16 {
        self.ymd().0
    }

    pub const fn month(self) -> u8 {
        self.ymd().1
    }

    pub const fn day(self) -> u8 {
        self.ymd().2
    }

    /// The following day, or `None` past `MAX`.
    pub fn succ(self) -> Option<Self> {
        self.add_days(1)
    }

    /// The preceding day, or `None` before `MIN`.
    pub fn pred(self) -> Option<Self> {
        self.add_days(-1)
    }

    /// Shifts by `days`, returning `None` if the result leaves the supported calendar.
    pub fn add_days(self, days: i64) -> Option<Self> {
        i64::from(self.0)
            .checked_add(days)
            .and_then(|index| Self::from_index(index).ok())
    }

    /// Signed number of days from `self` to `other`.
    pub const fn days_until(self, other: Self) -> i64 {
        other.0 as i64 - self.0 as i64
    }

    /// Builds a day from an index already known to be in range.
    pub(crate) const fn from_index_unchecked(index: i32) -> Self {
        Self(index)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.ymd();
        write!(f, "{year:04}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}")
    }
}

impl fmt::Debug for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDay({self})")
    }
}

impl FromStr for CalendarDay {
    type Err = DateError;

    /// Parses strict ISO 8601 `YYYY-MM-DD`. Zero padding is required so that
    /// string order and chronological order agree.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        let year = parse_component::<u16>(year, 4)?;
        let month = parse_component::<u8>(month, 2)?;
        let day = parse_component::<u8>(day, 2)?;

        Self::from_ymd(year, month, day)
    }
}

fn parse_component<T: FromStr>(part: &str, width: usize) -> Result<T, DateError> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(part.to_owned()));
    }
    part.parse::<T>().map_err(|_| DateError::InvalidFormat(part.to_owned()))
}

impl TryFrom<&str> for CalendarDay {
    type Error = DateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl serde::Serialize for CalendarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::day;

    #[test]
    fn test_parse_iso_day() {
        let d = "2025-05-10".parse::<CalendarDay>().expect("valid ISO day");
        assert_eq!(d.ymd(), (2025, 5, 10));
        assert_eq!(d.year(), 2025);
        assert_eq!(d.month(), 5);
        assert_eq!(d.day(), 10);
        assert_eq!(d.index(), 20_218);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 2025-05-10 ".parse::<CalendarDay>(), Ok(day("2025-05-10")));
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let format_cases = [
            TestCase { input: "2025-5-10", description: "unpadded month" },
            TestCase { input: "2025-05", description: "missing day" },
            TestCase { input: "2025-05-10-01", description: "too many parts" },
            TestCase { input: "05/10/2025", description: "month-first format" },
            TestCase { input: "2025-05-1x", description: "non-numeric day" },
            TestCase { input: "+025-05-10", description: "signed year" },
        ];
        for case in &format_cases {
            assert!(
                matches!(case.input.parse::<CalendarDay>(), Err(DateError::InvalidFormat(_))),
                "Expected InvalidFormat for: {}",
                case.description
            );
        }

        assert_eq!("".parse::<CalendarDay>(), Err(DateError::EmptyInput));
        assert_eq!("0000-01-01".parse::<CalendarDay>(), Err(DateError::InvalidYear(0)));
        assert_eq!("2025-13-01".parse::<CalendarDay>(), Err(DateError::InvalidMonth(13)));
        assert_eq!(
            "2025-02-29".parse::<CalendarDay>(),
            Err(DateError::InvalidDay { year: 2025, month: 2, day: 29 })
        );
        assert!("2024-02-29".parse::<CalendarDay>().is_ok());
    }

    #[test]
    fn test_display_is_zero_padded() {
        let d = CalendarDay::from_ymd(7, 3, 4).expect("valid day");
        assert_eq!(d.to_string(), "0007-03-04");
        assert_eq!(format!("{d:?}"), "CalendarDay(0007-03-04)");
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(day("2025-04-30") < day("2025-05-01"));
        assert!(day("2024-12-31") < day("2025-01-01"));
        assert_eq!(day("2025-05-10").days_until(day("2025-05-15")), 5);
        assert_eq!(day("2025-05-15").days_until(day("2025-05-10")), -5);
    }

    #[test]
    fn test_succ_and_pred_cross_month_and_year() {
        assert_eq!(day("2024-02-28").succ(), Some(day("2024-02-29")));
        assert_eq!(day("2024-02-29").succ(), Some(day("2024-03-01")));
        assert_eq!(day("2025-01-01").pred(), Some(day("2024-12-31")));
        assert_eq!(CalendarDay::MAX.succ(), None);
        assert_eq!(CalendarDay::MIN.pred(), None);
        assert_eq!(CalendarDay::MAX.add_days(i64::MAX), None);
        assert_eq!(CalendarDay::MIN.add_days(i64::MIN), None);
        assert_eq!(day("2025-05-10").add_days(i64::MIN), None);
        assert_eq!(day("2025-05-10").add_days(-9), Some(day("2025-05-01")));
        assert_eq!(CalendarDay::MAX.to_string(), "9999-12-31");
        assert_eq!(CalendarDay::MIN.to_string(), "0001-01-01");
    }

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(CalendarDay::from_index(0).map(|d| d.to_string()), Ok("1970-01-01".to_owned()));
        assert!(matches!(
            CalendarDay::from_index(i64::from(CalendarDay::MAX.index()) + 1),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(CalendarDay::try_from("2025-06-10"), Ok(day("2025-06-10")));
        assert_eq!(CalendarDay::try_from(""), Err(DateError::EmptyInput));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::InvalidYear(0).to_string(),
            "Year 0 cannot be booked (four-digit years 1-9999 only)"
        );
        assert_eq!(
            DateError::InvalidDay { year: 2025, month: 2, day: 29 }.to_string(),
            "2025-02 has no day 29"
        );
    }

    #[test]
    fn test_into_index() {
        let index: i32 = day("1970-01-02").into();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_serde_string_format() {
        let d = day("2025-06-01");
        let json = serde_json::to_string(&d).expect("serialize day");
        assert_eq!(json, r#""2025-06-01""#);
        let parsed: CalendarDay = serde_json::from_str(&json).expect("deserialize day");
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<CalendarDay>(r#""2025-06-31""#).is_err());
    }
}
