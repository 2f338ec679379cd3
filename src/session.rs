use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    BlockedDays, CalendarDay, DayMarking, Money, Nights, Quote, SelectionRange, SelectionState,
    TapOutcome, TotalsError, markings, prelude::*,
};

/// Identifier of a rental listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl ListingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Availability data for one listing, as supplied by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub listing_id: ListingId,
    #[serde(default)]
    pub blocked:    BlockedDays,
}

/// What checkout receives once dates are chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub listing_id:   ListingId,
    pub start:        CalendarDay,
    pub end:          CalendarDay,
    pub nights:       Nights,
    pub nightly_rate: Money,
    pub total:        Money,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No dates selected for listing {0}")]
    NoDates(ListingId),

    #[error(transparent)]
    Totals(#[from] TotalsError),
}

/// Date selection for one listing while its screen is open.
#[derive(Debug, Clone)]
pub struct BookingSession {
    availability: Availability,
    nightly_rate: Money,
    range:        SelectionRange,
}

impl BookingSession {
    pub fn new(availability: Availability, nightly_rate: Money) -> Self {
        tracing::debug!(
            listing = %availability.listing_id,
            blocked = availability.blocked.len(),
            rate = %nightly_rate,
            "booking session opened"
        );
        Self { availability, nightly_rate, range: SelectionRange::empty() }
    }

    pub const fn listing_id(&self) -> &ListingId {
        &self.availability.listing_id
    }

    pub const fn blocked(&self) -> &BlockedDays {
        &self.availability.blocked
    }

    pub const fn nightly_rate(&self) -> Money {
        self.nightly_rate
    }

    pub const fn range(&self) -> SelectionRange {
        self.range
    }

    pub fn tap(&mut self, day: CalendarDay) -> TapOutcome {
        let (next, outcome) = self.range.tap(&self.availability.blocked, day);
        self.range = next;
        outcome
    }

    /// Drops the selection, as when the user leaves the listing.
    pub fn clear(&mut self) {
        tracing::debug!(listing = %self.availability.listing_id, "selection cleared");
        self.range = SelectionRange::empty();
    }

    pub fn markings(&self) -> BTreeMap<CalendarDay, DayMarking> {
        markings(&self.range, &self.availability.blocked)
    }

    /// # Errors
    /// See [`Quote::for_range`].
    pub fn quote(&self) -> Result<Quote, TotalsError> {
        Quote::for_range(&self.range, self.nightly_rate)
    }

    /// Builds the checkout hand-off for the current selection.
    ///
    /// # Errors
    /// Returns `SessionError::NoDates` until both days are chosen, or
    /// `SessionError::Totals` if the total cannot be computed.
    pub fn reserve(&self) -> Result<ReservationRequest, SessionError> {
        let SelectionState::Complete { start, end } = self.range.state() else {
            return Err(SessionError::NoDates(self.availability.listing_id.clone()));
        };
        let quote = self.quote()?;

        tracing::debug!(
            listing = %self.availability.listing_id,
            %start,
            %end,
            total = %quote.total,
            "reservation requested"
        );
        Ok(ReservationRequest {
            listing_id: self.availability.listing_id.clone(),
            start,
            end,
            nights: quote.nights,
            nightly_rate: quote.nightly_rate,
            total: quote.total,
        })
    }
}
