//! Domain types for the train catcher.
//!
//! These are the validated value types that timetables are built from.
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod departure;
mod destination;
mod time;

pub use departure::Departure;
pub use destination::{Destination, InvalidDestination};
pub use time::{MINUTES_PER_DAY, MinuteOfDay, TimeError, weekday_from_index, weekday_name};
