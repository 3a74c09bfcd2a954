//! Lookup results.

use std::fmt;

use chrono::Weekday;
use serde::{Serialize, Serializer};

use super::calendar::DayType;
use super::classify::Urgency;
use crate::domain::{Departure, MinuteOfDay, weekday_name};

/// Departures sorted by urgency, as seen at one moment.
///
/// Each list is in time order. The lists only cover the part of the day
/// scanned before the lookup stopped, so `uncatchable` and `maybe` are not
/// a full-day report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    time: MinuteOfDay,
    #[serde(serialize_with = "serialize_weekday")]
    weekday: Weekday,
    day_type: DayType,
    uncatchable: Vec<Departure>,
    maybe: Vec<Departure>,
    good: Vec<Departure>,
}

impl LookupResult {
    /// An empty result for the given moment.
    pub(super) fn new(time: MinuteOfDay, weekday: Weekday, day_type: DayType) -> Self {
        Self {
            time,
            weekday,
            day_type,
            uncatchable: Vec::new(),
            maybe: Vec::new(),
            good: Vec::new(),
        }
    }

    /// File `departure` under `urgency`. Gone departures are dropped.
    pub(super) fn push(&mut self, urgency: Urgency, departure: Departure) {
        match urgency {
            Urgency::Gone => {}
            Urgency::Uncatchable => self.uncatchable.push(departure),
            Urgency::Maybe => self.maybe.push(departure),
            Urgency::Good => self.good.push(departure),
        }
    }

    /// The moment the lookup was made for.
    pub fn time(&self) -> MinuteOfDay {
        self.time
    }

    /// The weekday the lookup was made for.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The day type whose schedule was used.
    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    /// Still scheduled but too close to reach.
    pub fn uncatchable(&self) -> &[Departure] {
        &self.uncatchable
    }

    /// Reachable only by using up the safety margin.
    pub fn maybe(&self) -> &[Departure] {
        &self.maybe
    }

    /// Comfortably reachable, at most [`GOOD_DEPARTURES`](super::GOOD_DEPARTURES).
    pub fn good(&self) -> &[Departure] {
        &self.good
    }

    /// The earliest comfortably catchable departure, if any.
    pub fn next_good(&self) -> Option<&Departure> {
        self.good.first()
    }

    /// Returns true if no departures were found at all (the day has run
    /// out of matching trains).
    pub fn is_empty(&self) -> bool {
        self.uncatchable.is_empty() && self.maybe.is_empty() && self.good.is_empty()
    }
}

fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}

fn write_group(f: &mut fmt::Formatter<'_>, label: &str, deps: &[Departure]) -> fmt::Result {
    if deps.is_empty() {
        return Ok(());
    }
    write!(f, "\n{label}:")?;
    for dep in deps {
        write!(f, "\n  {dep}")?;
    }
    Ok(())
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", weekday_name(self.weekday), self.time)?;
        write_group(f, "Bad", &self.uncatchable)?;
        write_group(f, "Maybe", &self.maybe)?;
        write_group(f, "Good", &self.good)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Destination;

    fn dep(h: u32, m: u32, dest: &str) -> Departure {
        Departure::new(
            MinuteOfDay::from_hm(h, m).unwrap(),
            Destination::parse(dest).unwrap(),
        )
    }

    fn result() -> LookupResult {
        LookupResult::new(
            MinuteOfDay::from_hm(7, 0).unwrap(),
            Weekday::Tue,
            DayType::Weekday,
        )
    }

    #[test]
    fn empty_summary_is_header_only() {
        let r = result();
        assert!(r.is_empty());
        assert!(r.next_good().is_none());
        assert_eq!(r.to_string(), "Tuesday 07:00");
    }

    #[test]
    fn summary_lists_groups_in_order() {
        let mut r = result();
        r.push(Urgency::Uncatchable, dep(7, 3, "浦"));
        r.push(Urgency::Maybe, dep(7, 8, "川"));
        r.push(Urgency::Good, dep(7, 15, "宮"));
        r.push(Urgency::Good, dep(7, 20, "浦"));

        assert_eq!(
            r.to_string(),
            "Tuesday 07:00\nBad:\n  07:03 浦\nMaybe:\n  07:08 川\nGood:\n  07:15 宮\n  07:20 浦"
        );
        assert_eq!(r.next_good().unwrap().to_string(), "07:15 宮");
    }

    #[test]
    fn summary_omits_empty_groups() {
        let mut r = result();
        r.push(Urgency::Good, dep(7, 15, "宮"));
        assert_eq!(r.to_string(), "Tuesday 07:00\nGood:\n  07:15 宮");
        assert!(!r.is_empty());
    }

    #[test]
    fn gone_departures_are_not_kept() {
        let mut r = result();
        r.push(Urgency::Gone, dep(6, 59, "浦"));
        assert!(r.is_empty());
    }

    #[test]
    fn accessors() {
        let mut r = result();
        r.push(Urgency::Maybe, dep(7, 8, "川"));
        assert_eq!(r.time(), MinuteOfDay::from_hm(7, 0).unwrap());
        assert_eq!(r.weekday(), Weekday::Tue);
        assert_eq!(r.day_type(), DayType::Weekday);
        assert!(r.uncatchable().is_empty());
        assert_eq!(r.maybe(), [dep(7, 8, "川")]);
        assert!(r.good().is_empty());
    }

    #[test]
    fn serializes_to_json() {
        let mut r = result();
        r.push(Urgency::Maybe, dep(7, 8, "川"));
        let json = serde_json::to_value(&r).unwrap();

        assert_eq!(json["time"], "07:00");
        assert_eq!(json["weekday"], "Tuesday");
        assert_eq!(json["day_type"], "weekday");
        assert_eq!(json["maybe"][0]["time"], "07:08");
        assert_eq!(json["good"].as_array().unwrap().len(), 0);
    }
}
