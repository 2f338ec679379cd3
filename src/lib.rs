//! Booking calendar core for a peer-to-peer clothing rental marketplace.
//!
//! A listing's unavailable days load into [`BlockedDays`]. Calendar taps then
//! drive a [`SelectionRange`] that never spans a blocked day, and a complete
//! selection prices out as a [`Quote`]. [`BookingSession`] bundles these for
//! one listing screen and produces the [`ReservationRequest`] handed to
//! checkout.
//!
//! ```
//! use rental_calendar::{BlockedDays, CalendarDay, Quote, SelectionRange};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let blocked = BlockedDays::parse_iso(["2025-05-12"])?;
//! let range = SelectionRange::empty()
//!     .on_day_tap(&blocked, "2025-05-13".parse::<CalendarDay>()?)
//!     .on_day_tap(&blocked, "2025-05-18".parse::<CalendarDay>()?);
//!
//! let quote = Quote::for_range(&range, "20".parse()?)?;
//! assert_eq!(quote.to_string(), "Total (5 nights): $100.00");
//! # Ok(())
//! # }
//! ```

mod blocked;
mod civil;
mod consts;
mod day;
mod markings;
mod prelude;
mod selection;
mod session;
mod totals;

pub use blocked::{BlockedDays, PeriodicBlocking};
pub use civil::{days_in_month, is_leap_year};
pub use consts::*;
pub use day::{CalendarDay, DateError};
pub use markings::{DayMarking, markings};
pub use selection::{SelectionError, SelectionRange, SelectionState, TapOutcome};
pub use session::{Availability, BookingSession, ListingId, ReservationRequest, SessionError};
pub use totals::{Money, Nights, Quote, TotalsError};
