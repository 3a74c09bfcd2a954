//! Timetables for a single day type.
//!
//! A [`Schedule`] is a titled list of departures kept in time order. It can
//! be parsed from the timetable text format, filtered by destination and
//! searched for the next departure after a given time.

mod compact;
mod error;
mod filter;
mod parse;

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::domain::{Departure, Destination, MinuteOfDay};

pub use error::ParseError;
pub use filter::DestinationFilter;

/// Title used when a schedule is built without one.
pub const DEFAULT_TITLE: &str = "Schedule";

/// An ordered list of departures for one day type.
///
/// Departures are always sorted by time. Departures at the same minute keep
/// the order they were added in.
///
/// # Examples
///
/// ```
/// use train_catcher::domain::MinuteOfDay;
/// use train_catcher::schedule::{DestinationFilter, Schedule};
///
/// let schedule = Schedule::parse("Tennozu Isle\n7\n05浦\n12川\n8\n00浦\n").unwrap();
/// assert_eq!(schedule.title(), "Tennozu Isle");
/// assert_eq!(schedule.len(), 3);
///
/// let after = MinuteOfDay::from_hm(7, 5).unwrap();
/// let next = schedule.next_departure(after, &DestinationFilter::All).unwrap();
/// assert_eq!(next.to_string(), "07:12 川");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    title: String,
    departures: Vec<Departure>,
}

impl Schedule {
    /// Create a schedule, sorting the departures by time.
    ///
    /// The title is kept to a single trimmed line: line breaks are folded
    /// into spaces, and a blank title becomes [`DEFAULT_TITLE`].
    pub fn new(title: impl Into<String>, mut departures: Vec<Departure>) -> Self {
        departures.sort_by_key(Departure::time);
        Self {
            title: normalize_title(title.into()),
            departures,
        }
    }

    /// Parse a schedule from timetable text.
    ///
    /// The first non-blank line is the title. After that each line is an
    /// hour marker (digits only) or a departure: the minute followed by a
    /// one-character destination code, e.g. `05浦`. On error no schedule is
    /// built.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_lines(text.lines())
    }

    /// Parse a schedule from timetable lines.
    pub fn parse_lines<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (title, departures) = parse::parse_lines(lines)?;
        Ok(Self::new(title, departures))
    }

    /// Read and parse a UTF-8 timetable file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schedule = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            title = %schedule.title,
            departures = schedule.len(),
            "loaded timetable"
        );
        Ok(schedule)
    }

    /// Parse the compact rendering produced by this type's `Display` impl.
    pub fn parse_compact(text: &str) -> Result<Self, ParseError> {
        compact::parse(text)
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the departures in time order.
    pub fn departures(&self) -> &[Departure] {
        &self.departures
    }

    /// Iterate over departures in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Departure> {
        self.departures.iter()
    }

    /// Returns the number of departures.
    pub fn len(&self) -> usize {
        self.departures.len()
    }

    /// Returns true if there are no departures.
    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    /// Add a departure, keeping the time order.
    pub fn insert(&mut self, departure: Departure) {
        let idx = self
            .departures
            .partition_point(|d| d.time() <= departure.time());
        self.departures.insert(idx, departure);
    }

    /// Distinct destinations, in the order they first appear.
    pub fn destinations(&self) -> Vec<Destination> {
        let mut out: Vec<Destination> = Vec::new();
        for dep in &self.departures {
            if !out.contains(dep.destination()) {
                out.push(dep.destination().clone());
            }
        }
        out
    }

    /// A new schedule with only the departures that pass `filter`.
    pub fn filtered(&self, filter: &DestinationFilter) -> Schedule {
        Schedule {
            title: self.title.clone(),
            departures: self
                .departures
                .iter()
                .filter(|d| filter.matches(d.destination()))
                .cloned()
                .collect(),
        }
    }

    /// The first departure strictly after `after` that passes `filter`.
    ///
    /// Returns `None` when the day has no more matching trains.
    pub fn next_departure(
        &self,
        after: MinuteOfDay,
        filter: &DestinationFilter,
    ) -> Option<&Departure> {
        let start = self.departures.partition_point(|d| d.time() <= after);
        self.departures[start..]
            .iter()
            .find(|d| filter.matches(d.destination()))
    }
}

fn normalize_title(title: String) -> String {
    let lines: Vec<&str> = title
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        DEFAULT_TITLE.to_owned()
    } else {
        lines.join(" ")
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, Vec::new())
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Departure;
    type IntoIter = std::slice::Iter<'a, Departure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Schedule {
    /// Title, then one line per hour: `HH: MM dest MM dest ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        compact::render(self, f)
    }
}
