//! Timetable text format.
//!
//! A timetable file looks like:
//!
//! ```text
//! Tennozu Isle (weekdays)
//! 5
//! 32浦
//! 51川
//! 6
//! 04宮
//! ```
//!
//! The first non-blank line is the title. After that every line is either
//! an hour marker (digits only) or a departure: a minute followed by a
//! single destination character. Blank lines and surrounding whitespace
//! are ignored.

use tracing::trace;

use super::error::ParseError;
use crate::domain::{Departure, Destination, MinuteOfDay};

/// One non-blank line of a timetable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TimetableLine {
    /// Sets the hour for the departures that follow.
    HourMarker(u32),
    /// A departure within the current hour.
    Departure { minute: u32, destination: Destination },
}

impl TimetableLine {
    /// Read a single trimmed, non-blank line. `line_no` is only used for
    /// error reporting.
    pub(crate) fn parse(text: &str, line_no: usize) -> Result<Self, ParseError> {
        if text.bytes().all(|b| b.is_ascii_digit()) {
            let hour = text
                .parse::<u32>()
                .ok()
                .filter(|h| *h < 24)
                .ok_or_else(|| ParseError::InvalidHour {
                    line: line_no,
                    text: text.to_owned(),
                })?;
            return Ok(TimetableLine::HourMarker(hour));
        }

        let invalid_minute = || ParseError::InvalidMinute {
            line: line_no,
            text: text.to_owned(),
        };

        let (minute_part, dest_char) = split_last_char(text).ok_or_else(invalid_minute)?;
        let destination = Destination::from_char(dest_char).ok_or_else(invalid_minute)?;

        let minute_part = minute_part.trim();
        if minute_part.is_empty() || !minute_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_minute());
        }
        let minute = minute_part
            .parse::<u32>()
            .ok()
            .filter(|m| *m < 60)
            .ok_or_else(invalid_minute)?;

        Ok(TimetableLine::Departure {
            minute,
            destination,
        })
    }
}

/// Split off the final character of `text`.
fn split_last_char(text: &str) -> Option<(&str, char)> {
    let (idx, c) = text.char_indices().next_back()?;
    Some((&text[..idx], c))
}

/// Parse timetable lines into a title and departures (in file order).
pub(crate) fn parse_lines<I, S>(lines: I) -> Result<(String, Vec<Departure>), ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut title: Option<String> = None;
    let mut current_hour: Option<u32> = None;
    let mut departures = Vec::new();

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let text = raw.as_ref().trim_start_matches('\u{feff}').trim();
        if text.is_empty() {
            continue;
        }

        if title.is_none() {
            title = Some(text.to_owned());
            continue;
        }

        match TimetableLine::parse(text, line_no)? {
            TimetableLine::HourMarker(hour) => {
                trace!(line = line_no, hour, "hour marker");
                current_hour = Some(hour);
            }
            TimetableLine::Departure {
                minute,
                destination,
            } => {
                let hour = current_hour.ok_or_else(|| ParseError::DepartureBeforeHour {
                    line: line_no,
                    text: text.to_owned(),
                })?;
                let time =
                    MinuteOfDay::from_hm(hour, minute).map_err(|_| ParseError::InvalidMinute {
                        line: line_no,
                        text: text.to_owned(),
                    })?;
                departures.push(Departure::new(time, destination));
            }
        }
    }

    let title = title.ok_or(ParseError::Empty)?;
    Ok((title, departures))
}
