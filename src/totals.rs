use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDay, SelectionRange, SelectionState,
    consts::{CENTS_PER_UNIT, CURRENCY_SYMBOL, DECIMAL_POINT},
};

/// A non-negative amount of money held in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

/// Billable nights for a stay. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nights(NonZeroU32);

/// Price summary for a complete selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub nights:       Nights,
    pub nightly_rate: Money,
    pub total:        Money,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TotalsError {
    /// Totals need both a start and an end day.
    #[error("Selection is not complete")]
    Incomplete,

    #[error("Total for {nights} at {rate} per night overflows")]
    Overflow { nights: Nights, rate: Money },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units, or `None` on overflow.
    pub const fn from_units(units: u64) -> Option<Self> {
        match units.checked_mul(CENTS_PER_UNIT) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn checked_mul(self, nights: Nights) -> Option<Self> {
        self.0.checked_mul(u64::from(nights.get())).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{CURRENCY_SYMBOL}{}{DECIMAL_POINT}{:02}",
            self.0 / CENTS_PER_UNIT,
            self.0 % CENTS_PER_UNIT
        )
    }
}

impl FromStr for Money {
    type Err = TotalsError;

    /// Accepts `20`, `20.5`, `20.50` and the same with a leading `$`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TotalsError::InvalidAmount(s.to_owned());
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);

        let (units, fraction) = digits.split_once(DECIMAL_POINT).unwrap_or((digits, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if units.is_empty() || !all_digits(units) || fraction.len() > 2 || !all_digits(fraction) {
            return Err(invalid());
        }
        if digits.ends_with(DECIMAL_POINT) {
            return Err(invalid());
        }

        let units: u64 = units.parse().map_err(|_| invalid())?;
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse::<u64>().map_err(|_| invalid())?,
        };

        Self::from_units(units)
            .and_then(|m| m.0.checked_add(cents))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl Nights {
    /// One night, the minimum.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Nights between two days in either order, with a floor of one.
    pub fn between(a: CalendarDay, b: CalendarDay) -> Self {
        let span = u32::try_from(a.days_until(b).unsigned_abs()).unwrap_or(u32::MAX);
        NonZeroU32::new(span).map_or(Self::ONE, Self)
    }

    /// Nights for a complete selection, `None` otherwise.
    pub fn for_range(range: &SelectionRange) -> Option<Self> {
        match range.state() {
            SelectionState::Complete { start, end } => Some(Self::between(start, end)),
            SelectionState::Empty | SelectionState::OneSelected(_) => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Nights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.get();
        write!(f, "{n} night{}", if n > 1 { "s" } else { "" })
    }
}

impl Quote {
    /// # Errors
    /// Returns `TotalsError::Overflow` if the total does not fit.
    pub fn new(nights: Nights, nightly_rate: Money) -> Result<Self, TotalsError> {
        let total = nightly_rate
            .checked_mul(nights)
            .ok_or(TotalsError::Overflow { nights, rate: nightly_rate })?;
        Ok(Self { nights, nightly_rate, total })
    }

    /// # Errors
    /// Returns `TotalsError::Incomplete` unless the range has both ends, or
    /// `TotalsError::Overflow` if the total does not fit.
    pub fn for_range(range: &SelectionRange, nightly_rate: Money) -> Result<Self, TotalsError> {
        let nights = Nights::for_range(range).ok_or(TotalsError::Incomplete)?;
        Self::new(nights, nightly_rate)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total ({}): {}", self.nights, self.total)
    }
}
