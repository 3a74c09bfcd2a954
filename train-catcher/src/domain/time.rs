//! Time-of-day handling for timetables.
//!
//! Timetables only ever describe a single service day, so times are stored
//! as minutes after midnight. There is no date, timezone or DST handling.

use std::fmt;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when building or parsing an invalid time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day, stored as minutes after midnight.
///
/// Always in the range `0..1440`.
///
/// # Examples
///
/// ```
/// use train_catcher::domain::MinuteOfDay;
///
/// let t = MinuteOfDay::from_hm(7, 5).unwrap();
/// assert_eq!(t.minutes(), 425);
/// assert_eq!(t.to_string(), "07:05");
///
/// assert!(MinuteOfDay::new(1440).is_err());
/// assert!(MinuteOfDay::from_hm(24, 0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u32);

impl MinuteOfDay {
    /// Midnight.
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);

    /// Create from minutes after midnight.
    pub fn new(minutes: u32) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::new("must be less than 1440 minutes"));
        }
        Ok(Self(minutes))
    }

    /// Create from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Parse from "HH:MM" (or "H:MM") format.
    ///
    /// ```
    /// use train_catcher::domain::MinuteOfDay;
    ///
    /// assert_eq!(MinuteOfDay::parse_hhmm("08:30").unwrap().minutes(), 510);
    /// assert_eq!(MinuteOfDay::parse_hhmm("8:30").unwrap().minutes(), 510);
    /// assert!(MinuteOfDay::parse_hhmm("0830").is_err());
    /// assert!(MinuteOfDay::parse_hhmm("08:3").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

        if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::new("invalid hour digits"));
        }
        if minute.len() != 2 || !minute.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::new("invalid minute digits"));
        }

        let hour = hour
            .parse()
            .map_err(|_| TimeError::new("invalid hour digits"))?;
        let minute = minute
            .parse()
            .map_err(|_| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Returns the minutes after midnight.
    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    /// Returns the minute within the hour (0-59).
    pub fn minute(&self) -> u32 {
        self.0 % 60
    }

    /// Add a number of minutes, returning `None` past the end of the day.
    pub fn checked_add(&self, minutes: u32) -> Option<Self> {
        let total = self.0.checked_add(minutes)?;
        Self::new(total).ok()
    }
}

impl From<NaiveTime> for MinuteOfDay {
    fn from(time: NaiveTime) -> Self {
        Self(time.hour() * 60 + time.minute())
    }
}

impl TryFrom<u32> for MinuteOfDay {
    type Error = TimeError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl TryFrom<(u32, u32)> for MinuteOfDay {
    type Error = TimeError;

    fn try_from((hour, minute): (u32, u32)) -> Result<Self, Self::Error> {
        Self::from_hm(hour, minute)
    }
}

impl fmt::Debug for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinuteOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for MinuteOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Convert a weekday index (0 = Monday .. 6 = Sunday) to a `Weekday`.
///
/// ```
/// use chrono::Weekday;
/// use train_catcher::domain::weekday_from_index;
///
/// assert_eq!(weekday_from_index(0).unwrap(), Weekday::Mon);
/// assert_eq!(weekday_from_index(6).unwrap(), Weekday::Sun);
/// assert!(weekday_from_index(7).is_err());
/// ```
pub fn weekday_from_index(index: u8) -> Result<Weekday, TimeError> {
    Weekday::try_from(index).map_err(|_| TimeError::new("weekday must be 0-6"))
}

/// Full English name of a weekday, as shown in lookup summaries.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Hour and minute always recombine to the stored value
        #[test]
        fn components_recombine(m in 0u32..MINUTES_PER_DAY) {
            let t = MinuteOfDay::new(m).unwrap();
            prop_assert_eq!(t.hour() * 60 + t.minute(), m);
            prop_assert!(t.hour() < 24);
            prop_assert!(t.minute() < 60);
        }

        /// Display output parses back to the same time
        #[test]
        fn display_parses_back(m in 0u32..MINUTES_PER_DAY) {
            let t = MinuteOfDay::new(m).unwrap();
            prop_assert_eq!(MinuteOfDay::parse_hhmm(&t.to_string()).unwrap(), t);
        }

        /// Ordering matches the underlying minute count
        #[test]
        fn ordering_matches_minutes(a in 0u32..MINUTES_PER_DAY, b in 0u32..MINUTES_PER_DAY) {
            let ta = MinuteOfDay::new(a).unwrap();
            let tb = MinuteOfDay::new(b).unwrap();
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
        }
    }
}
