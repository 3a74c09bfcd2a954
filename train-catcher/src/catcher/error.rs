//! Train catcher error types.

use chrono::Weekday;

use super::calendar::DayType;
use crate::schedule::ParseError;

/// Errors from configuring or querying a [`TrainCatcher`](super::TrainCatcher).
#[derive(Debug, thiserror::Error)]
pub enum CatcherError {
    /// A schedule given to the catcher could not be parsed
    #[error("invalid schedule: {0}")]
    InvalidSchedule(#[from] ParseError),

    /// A lookup was made for a day whose day type has no schedule
    #[error("no schedule configured for {day_type} days (needed for {weekday})")]
    Unconfigured { weekday: Weekday, day_type: DayType },
}
