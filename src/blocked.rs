use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDay, DateError,
    consts::{DEFAULT_BLOCK_STRIDE, DEFAULT_BLOCK_WINDOW_DAYS},
};

/// Days that cannot be booked for a listing.
///
/// Built once when availability loads and only read afterwards. Serializes as
/// a sorted list of ISO day strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CalendarDay>", into = "Vec<CalendarDay>")]
pub struct BlockedDays {
    days: HashSet<CalendarDay>,
}

/// Repeating block pattern: every `stride`-th day inside a window of
/// `window_days` days is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicBlocking {
    pub window_days: u32,
    pub stride:      u32,
}

impl Default for PeriodicBlocking {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_BLOCK_WINDOW_DAYS,
            stride:      DEFAULT_BLOCK_STRIDE,
        }
    }
}

impl BlockedDays {
    /// An empty set; nothing is blocked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from ISO `YYYY-MM-DD` strings.
    ///
    /// # Errors
    /// Returns the `DateError` of the first entry that fails to parse.
    pub fn parse_iso<'a, I>(days: I) -> Result<Self, DateError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        days.into_iter().map(str::parse::<CalendarDay>).collect()
    }

    /// Blocks `from`, `from + stride`, `from + 2 * stride`, ... while the
    /// offset stays below `window_days`. Days beyond the supported calendar
    /// are skipped. A zero stride or window blocks nothing.
    pub fn periodic(from: CalendarDay, pattern: &PeriodicBlocking) -> Self {
        if pattern.stride == 0 {
            return Self::new();
        }
        (0..pattern.window_days)
            .step_by(pattern.stride as usize)
            .filter_map(|offset| from.add_days(i64::from(offset)))
            .collect()
    }

    #[inline]
    pub fn contains(&self, day: CalendarDay) -> bool {
        self.days.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates the blocked days in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = CalendarDay> + '_ {
        self.days.iter().copied()
    }

    /// Blocked days in chronological order.
    pub fn sorted(&self) -> Vec<CalendarDay> {
        let mut days: Vec<_> = self.iter().collect();
        days.sort_unstable();
        days
    }

    /// True if any day strictly between `a` and `b` is blocked. Argument
    /// order does not matter and the endpoints themselves are not checked.
    pub fn any_between(&self, a: CalendarDay, b: CalendarDay) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let interior = i64::from(hi.index()) - i64::from(lo.index()) - 1;
        if interior <= 0 {
            return false;
        }

        // Walk whichever side is shorter: the span or the set.
        if usize::try_from(interior).is_ok_and(|n| n <= self.days.len()) {
            (lo.index() + 1..hi.index())
                .any(|index| self.contains(CalendarDay::from_index_unchecked(index)))
        } else {
            self.days.iter().any(|&day| lo < day && day < hi)
        }
    }
}

impl FromIterator<CalendarDay> for BlockedDays {
    fn from_iter<T: IntoIterator<Item = CalendarDay>>(iter: T) -> Self {
        let days: HashSet<_> = iter.into_iter().collect();
        tracing::trace!(blocked = days.len(), "built blocked day set");
        Self { days }
    }
}

impl From<Vec<CalendarDay>> for BlockedDays {
    fn from(days: Vec<CalendarDay>) -> Self {
        days.into_iter().collect()
    }
}

impl From<BlockedDays> for Vec<CalendarDay> {
    fn from(blocked: BlockedDays) -> Self {
        blocked.sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{blocked, day};

    #[test]
    fn test_empty_set_blocks_nothing() {
        let set = BlockedDays::new();
        assert!(set.is_empty());
        assert!(!set.contains(day("2025-05-10")));
        assert!(!set.any_between(day("2025-01-01"), day("2025-12-31")));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = blocked(&["2025-05-12", "2025-05-12", "2025-05-13"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.sorted(), vec![day("2025-05-12"), day("2025-05-13")]);
    }

    #[test]
    fn test_parse_iso_reports_bad_entry() {
        let result = BlockedDays::parse_iso(["2025-05-12", "2025-02-30"]);
        assert!(matches!(result, Err(DateError::InvalidDay { day: 30, .. })));
    }

    #[test]
    fn test_any_between_ignores_endpoints() {
        struct TestCase {
            a:           &'static str,
            b:           &'static str,
            expected:    bool,
            description: &'static str,
        }

        let set = blocked(&["2025-05-12"]);
        let cases = [
            TestCase { a: "2025-05-10", b: "2025-05-15", expected: true, description: "blocked day inside" },
            TestCase { a: "2025-05-15", b: "2025-05-10", expected: true, description: "reversed arguments" },
            TestCase { a: "2025-05-12", b: "2025-05-15", expected: false, description: "blocked start" },
            TestCase { a: "2025-05-10", b: "2025-05-12", expected: false, description: "blocked end" },
            TestCase { a: "2025-05-11", b: "2025-05-13", expected: true, description: "single interior day" },
            TestCase { a: "2025-05-13", b: "2025-05-20", expected: false, description: "span after block" },
            TestCase { a: "2025-05-11", b: "2025-05-11", expected: false, description: "same day" },
        ];

        for case in &cases {
            assert_eq!(
                set.any_between(day(case.a), day(case.b)),
                case.expected,
                "any_between({}, {}): {}",
                case.a,
                case.b,
                case.description
            );
        }
    }

    #[test]
    fn test_any_between_long_span_scans_set() {
        let set = blocked(&["2025-03-01", "2031-07-04"]);
        assert!(set.any_between(day("2025-01-01"), day("2040-01-01")));
        assert!(!set.any_between(day("2025-03-02"), day("2031-07-04")));
    }

    #[test]
    fn test_periodic_default_pattern() {
        let from = day("2025-05-01");
        let set = BlockedDays::periodic(from, &PeriodicBlocking::default());
        assert_eq!(
            set.sorted(),
            vec![
                day("2025-05-01"),
                day("2025-05-06"),
                day("2025-05-11"),
                day("2025-05-16"),
                day("2025-05-21"),
            ]
        );
    }

    #[test]
    fn test_periodic_degenerate_patterns() {
        let from = day("2025-05-01");
        let zero_stride = PeriodicBlocking { window_days: 10, stride: 0 };
        let zero_window = PeriodicBlocking { window_days: 0, stride: 3 };
        assert!(BlockedDays::periodic(from, &zero_stride).is_empty());
        assert!(BlockedDays::periodic(from, &zero_window).is_empty());

        let near_end = BlockedDays::periodic(CalendarDay::MAX, &PeriodicBlocking { window_days: 10, stride: 1 });
        assert_eq!(near_end.sorted(), vec![CalendarDay::MAX]);
    }

    #[test]
    fn test_periodic_config_defaults_missing_fields() {
        let pattern: PeriodicBlocking = serde_json::from_str(r#"{"stride": 7}"#).expect("parse pattern");
        assert_eq!(pattern, PeriodicBlocking { window_days: DEFAULT_BLOCK_WINDOW_DAYS, stride: 7 });
    }

    #[test]
    fn test_serde_sorted_list() {
        let set = blocked(&["2025-05-20", "2025-05-12"]);
        let json = serde_json::to_string(&set).expect("serialize set");
        assert_eq!(json, r#"["2025-05-12","2025-05-20"]"#);
        let parsed: BlockedDays = serde_json::from_str(&json).expect("deserialize set");
        assert_eq!(parsed, set);
    }
}
