//! Timetable parse errors.

use std::path::PathBuf;

/// Errors raised while reading a timetable.
///
/// Line numbers are 1-based and count blank lines, so they match what an
/// editor shows.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The source had no non-blank line to use as a title
    #[error("timetable is empty (no title line)")]
    Empty,

    /// An hour marker outside 0-23
    #[error("line {line}: invalid hour {text:?}")]
    InvalidHour { line: usize, text: String },

    /// A departure whose minute field is not an integer in 0-59
    #[error("line {line}: invalid minute in {text:?}")]
    InvalidMinute { line: usize, text: String },

    /// A departure line that appears before any hour marker
    #[error("line {line}: departure {text:?} appears before any hour marker")]
    DepartureBeforeHour { line: usize, text: String },

    /// A compact-rendering line that could not be read
    #[error("line {line}: malformed schedule line {text:?}")]
    Malformed { line: usize, text: String },

    /// The timetable file could not be read
    #[error("failed to read timetable {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
