//! A single scheduled departure.

use std::fmt;

use serde::Serialize;

use super::{Destination, MinuteOfDay, TimeError};

/// A scheduled train leaving at a fixed time of day for a destination.
///
/// Departures are immutable once built.
///
/// # Examples
///
/// ```
/// use train_catcher::domain::{Departure, Destination, MinuteOfDay};
///
/// let dep = Departure::new(
///     MinuteOfDay::from_hm(7, 5).unwrap(),
///     Destination::parse("浦").unwrap(),
/// );
/// assert_eq!(dep.minutes_from_midnight(), 425);
/// assert_eq!(dep.to_string(), "07:05 浦");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Departure {
    time: MinuteOfDay,
    destination: Destination,
}

impl Departure {
    /// Create a departure at `time` heading to `destination`.
    pub fn new(time: MinuteOfDay, destination: Destination) -> Self {
        Self { time, destination }
    }

    /// Create a departure at `hour:minute` heading to `destination`.
    ///
    /// Fails if the hour is not 0-23 or the minute is not 0-59.
    pub fn from_hm(hour: u32, minute: u32, destination: Destination) -> Result<Self, TimeError> {
        Ok(Self::new(MinuteOfDay::from_hm(hour, minute)?, destination))
    }

    /// Returns the departure time.
    pub fn time(&self) -> MinuteOfDay {
        self.time
    }

    /// Returns the departure time as minutes after midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.time.minutes()
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns the destination code.
    pub fn destination(&self) -> &Destination {
        &self.destination
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.destination)
    }
}
