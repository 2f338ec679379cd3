use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{BlockedDays, CalendarDay, SelectionRange, SelectionState, prelude::*};

/// How a single calendar cell is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMarking {
    /// Unavailable; rendered disabled.
    #[display(fmt = "blocked")]
    Blocked,
    /// Lone selected day: the first tap, or a range whose ends coincide.
    #[display(fmt = "single")]
    Single,
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "within")]
    Within,
    #[display(fmt = "end")]
    End,
}

/// Markings for every day that is not rendered plainly. Selection markings
/// take precedence over blocked ones.
pub fn markings(range: &SelectionRange, blocked: &BlockedDays) -> BTreeMap<CalendarDay, DayMarking> {
    let mut marked: BTreeMap<_, _> = blocked.iter().map(|day| (day, DayMarking::Blocked)).collect();

    match range.state() {
        SelectionState::Empty => {},
        SelectionState::OneSelected(day) => {
            marked.insert(day, DayMarking::Single);
        },
        SelectionState::Complete { start, end } if start == end => {
            marked.insert(start, DayMarking::Single);
        },
        SelectionState::Complete { start, end } => {
            marked.extend(range.days().map(|day| (day, DayMarking::Within)));
            marked.insert(start, DayMarking::Start);
            marked.insert(end, DayMarking::End);
        },
    }

    marked
}
