//! Time sources for lookups.

use chrono::{Datelike, Local, NaiveDateTime, Weekday};

use crate::domain::MinuteOfDay;

/// Source of "now" for lookups that don't give an explicit time.
///
/// This abstraction lets the catcher be tested without the wall clock.
pub trait Clock {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// The current time of day and weekday.
    fn today(&self) -> (MinuteOfDay, Weekday) {
        let now = self.now();
        (MinuteOfDay::from(now.time()), now.weekday())
    }
}

/// The machine's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
