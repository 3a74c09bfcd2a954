//! Compact one-line-per-hour rendering of a schedule.
//!
//! ```text
//! Tennozu Isle (weekdays)
//! 05: 32 浦 51 川
//! 06: 04 宮
//! ```

use std::fmt::{self, Write};

use super::Schedule;
use super::error::ParseError;
use crate::domain::{Departure, Destination, MinuteOfDay};

/// Write the compact rendering of `schedule` to `f`.
pub(crate) fn render(schedule: &Schedule, f: &mut impl Write) -> fmt::Result {
    f.write_str(schedule.title())?;

    let mut current_hour = None;
    for dep in schedule.iter() {
        if current_hour != Some(dep.hour()) {
            current_hour = Some(dep.hour());
            write!(f, "\n{:02}:", dep.hour())?;
        }
        write!(f, " {:02} {}", dep.minute(), dep.destination())?;
    }
    Ok(())
}

/// Read back the output of [`render`].
pub(crate) fn parse(text: &str) -> Result<Schedule, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, title) = lines.next().ok_or(ParseError::Empty)?;
    let mut departures = Vec::new();

    for (line_no, line) in lines {
        let malformed = || ParseError::Malformed {
            line: line_no,
            text: line.to_owned(),
        };

        let (hour, rest) = line.split_once(':').ok_or_else(malformed)?;
        let hour = hour
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|h| *h < 24)
            .ok_or_else(|| ParseError::InvalidHour {
                line: line_no,
                text: line.to_owned(),
            })?;

        let tokens: Vec<&str> = rest.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() % 2 != 0 {
            return Err(malformed());
        }

        for pair in tokens.chunks(2) {
            let invalid_minute = || ParseError::InvalidMinute {
                line: line_no,
                text: line.to_owned(),
            };
            let minute: u32 = pair[0].parse().map_err(|_| invalid_minute())?;
            let time = MinuteOfDay::from_hm(hour, minute).map_err(|_| invalid_minute())?;
            let destination = Destination::parse(pair[1]).map_err(|_| malformed())?;
            departures.push(Departure::new(time, destination));
        }
    }

    Ok(Schedule::new(title, departures))
}
