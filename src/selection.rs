//! Booking range selection driven by single-day taps.
//!
//! [`SelectionRange`] is a plain value and [`SelectionRange::tap`] is a pure
//! transition over `(range, blocked days, tapped day)`. A range never spans a
//! blocked day: the transition refuses to build one, collapsing the selection
//! back to empty instead.

use serde::{Deserialize, Serialize};

use crate::{BlockedDays, CalendarDay, prelude::*};

/// The user's in-progress or completed choice of rental days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct SelectionRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<CalendarDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end:   Option<CalendarDay>,
}

/// Read-only view of where a [`SelectionRange`] stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    Empty,
    /// Waiting for the second tap.
    OneSelected(CalendarDay),
    /// `start <= end`, nothing blocked in between.
    Complete { start: CalendarDay, end: CalendarDay },
}

/// What a tap did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TapOutcome {
    /// The tapped day is blocked; nothing changed.
    #[display(fmt = "ignored")]
    Ignored,
    /// A new range was started at the tapped day.
    #[display(fmt = "started")]
    Started,
    /// The range was completed.
    #[display(fmt = "completed")]
    Completed,
    /// The span would have crossed a blocked day; the selection was cleared.
    #[display(fmt = "reset")]
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Selection has an end ({end}) but no start")]
    EndWithoutStart { end: CalendarDay },

    #[error("Invalid selection: start ({start}) is after end ({end})")]
    Reversed { start: CalendarDay, end: CalendarDay },

    #[error("Day {0} is blocked and cannot bound a selection")]
    BlockedEndpoint(CalendarDay),

    #[error("Selection {start}/{end} spans a blocked day")]
    BlockedInside { start: CalendarDay, end: CalendarDay },
}

impl SelectionRange {
    pub const fn empty() -> Self {
        Self { start: None, end: None }
    }

    /// A complete range checked against `blocked`. Unlike taps, the
    /// endpoints are not reordered.
    ///
    /// # Errors
    /// Returns a `SelectionError` if the order is wrong, an endpoint is
    /// blocked, or a blocked day lies strictly inside.
    pub fn between(
        start: CalendarDay,
        end: CalendarDay,
        blocked: &BlockedDays,
    ) -> Result<Self, SelectionError> {
        if start > end {
            return Err(SelectionError::Reversed { start, end });
        }
        if let Some(day) = [start, end].into_iter().find(|d| blocked.contains(*d)) {
            return Err(SelectionError::BlockedEndpoint(day));
        }
        if blocked.any_between(start, end) {
            return Err(SelectionError::BlockedInside { start, end });
        }
        Ok(Self::complete(start, end))
    }

    const fn starting_at(day: CalendarDay) -> Self {
        Self { start: Some(day), end: None }
    }

    const fn complete(start: CalendarDay, end: CalendarDay) -> Self {
        Self { start: Some(start), end: Some(end) }
    }

    pub const fn start(&self) -> Option<CalendarDay> {
        self.start
    }

    pub const fn end(&self) -> Option<CalendarDay> {
        self.end
    }

    pub const fn state(&self) -> SelectionState {
        match (self.start, self.end) {
            (Some(start), Some(end)) => SelectionState::Complete { start, end },
            (Some(start), None) => SelectionState::OneSelected(start),
            (None, _) => SelectionState::Empty,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub const fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Whether `day` is highlighted by this selection.
    pub fn contains(&self, day: CalendarDay) -> bool {
        match self.state() {
            SelectionState::Empty => false,
            SelectionState::OneSelected(start) => start == day,
            SelectionState::Complete { start, end } => start <= day && day <= end,
        }
    }

    /// Every day of a complete range, in order. Empty otherwise.
    pub fn days(&self) -> impl Iterator<Item = CalendarDay> {
        let span = match self.state() {
            SelectionState::Complete { start, end } => start.index()..end.index() + 1,
            SelectionState::Empty | SelectionState::OneSelected(_) => 0..0,
        };
        span.map(CalendarDay::from_index_unchecked)
    }

    /// Applies one tap and reports what happened.
    ///
    /// | state        | blocked tap | free tap                                   |
    /// |--------------|-------------|--------------------------------------------|
    /// | Empty        | ignored     | start a range                              |
    /// | OneSelected  | ignored     | complete (sorted), or reset if it spans a blocked day |
    /// | Complete     | ignored     | start a new range                          |
    pub fn tap(&self, blocked: &BlockedDays, day: CalendarDay) -> (Self, TapOutcome) {
        if blocked.contains(day) {
            tracing::debug!(%day, "tap ignored, day is blocked");
            return (*self, TapOutcome::Ignored);
        }

        let (next, outcome) = match self.state() {
            SelectionState::Empty | SelectionState::Complete { .. } => {
                (Self::starting_at(day), TapOutcome::Started)
            },
            SelectionState::OneSelected(start) if blocked.any_between(start, day) => {
                (Self::empty(), TapOutcome::Reset)
            },
            SelectionState::OneSelected(start) if day < start => {
                (Self::complete(day, start), TapOutcome::Completed)
            },
            SelectionState::OneSelected(start) => (Self::complete(start, day), TapOutcome::Completed),
        };

        tracing::debug!(%day, %outcome, range = ?next, "selection tap");
        (next, outcome)
    }

    /// [`tap`](Self::tap) without the outcome.
    pub fn on_day_tap(&self, blocked: &BlockedDays, day: CalendarDay) -> Self {
        self.tap(blocked, day).0
    }
}

#[derive(Deserialize)]
struct RawSelection {
    #[serde(default)]
    start: Option<CalendarDay>,
    #[serde(default)]
    end:   Option<CalendarDay>,
}

impl TryFrom<RawSelection> for SelectionRange {
    type Error = SelectionError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        match (raw.start, raw.end) {
            (None, Some(end)) => Err(SelectionError::EndWithoutStart { end }),
            (Some(start), Some(end)) if start > end => Err(SelectionError::Reversed { start, end }),
            (start, end) => Ok(Self { start, end }),
        }
    }
}
