//! Departure classification and lookup.
//!
//! This module answers "given the time and day, which train is worth going
//! for?". Each departure is classified by how urgently the rider would
//! have to leave to catch it, and the engine collects the most relevant
//! ones into a [`LookupResult`].

mod calendar;
mod classify;
mod clock;
mod error;
mod lookup;
mod result;


pub use calendar::{DayCalendar, DayType};
pub use classify::{Urgency, classify};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CatcherError;
pub use lookup::{CatcherConfig, GOOD_DEPARTURES, ScheduleSource, TrainCatcher};
pub use result::LookupResult;
