//! Destination code type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid destination code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid destination code: {reason}")]
pub struct InvalidDestination {
    reason: &'static str,
}

/// A short code identifying a train's line or terminus.
///
/// Timetables mark each departure with a single character (e.g. `浦` for
/// Urawa-bound trains), but longer codes are allowed. A code is never
/// empty and never contains whitespace.
///
/// # Examples
///
/// ```
/// use train_catcher::domain::Destination;
///
/// let d = Destination::parse("浦").unwrap();
/// assert_eq!(d.as_str(), "浦");
///
/// assert!(Destination::parse("").is_err());
/// assert!(Destination::parse("a b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Destination(String);

impl Destination {
    /// Parse a destination code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidDestination> {
        if s.is_empty() {
            return Err(InvalidDestination {
                reason: "must not be empty",
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidDestination {
                reason: "must not contain whitespace",
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Create a single-character destination code.
    ///
    /// Returns `None` for whitespace characters.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_whitespace() {
            return None;
        }
        Some(Self(c.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Destination {
    type Error = InvalidDestination;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Destination> for String {
    fn from(d: Destination) -> Self {
        d.0
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Destination({})", self.0)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(Destination::parse("浦").is_ok());
        assert!(Destination::parse("A").is_ok());
        assert!(Destination::parse("KGX").is_ok());
    }

    #[test]
    fn reject_whitespace() {
        assert!(Destination::parse(" ").is_err());
        assert!(Destination::parse("浦 ").is_err());
        assert!(Destination::parse("\t").is_err());
        assert!(Destination::from_char(' ').is_none());
        assert!(Destination::from_char('\u{3000}').is_none());
    }

    #[test]
    fn from_char_matches_parse() {
        assert_eq!(
            Destination::from_char('川').unwrap(),
            Destination::parse("川").unwrap()
        );
    }

    #[test]
    fn display_and_debug() {
        let d = Destination::parse("宮").unwrap();
        assert_eq!(format!("{}", d), "宮");
        assert_eq!(format!("{:?}", d), "Destination(宮)");
    }

    #[test]
    fn serde_roundtrip_validates() {
        let d: Destination = serde_json::from_str("\"赤\"").unwrap();
        assert_eq!(d.as_str(), "赤");
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"赤\"");

        assert!(serde_json::from_str::<Destination>("\"\"").is_err());
    }
}
