//! Mapping calendar weekdays to timetable day types.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Which timetable applies on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Saturday,
    Holiday,
}

impl DayType {
    /// All day types, in display order.
    pub const ALL: [DayType; 3] = [DayType::Weekday, DayType::Saturday, DayType::Holiday];
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DayType::Weekday => "weekday",
            DayType::Saturday => "saturday",
            DayType::Holiday => "holiday",
        })
    }
}

/// A total mapping from weekday to day type.
///
/// Every weekday always resolves to some day type; whether that day type
/// has a schedule is checked at lookup time.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use train_catcher::catcher::{DayCalendar, DayType};
///
/// let calendar = DayCalendar::default();
/// assert_eq!(calendar.day_type(Weekday::Wed), DayType::Weekday);
/// assert_eq!(calendar.day_type(Weekday::Sun), DayType::Holiday);
///
/// // Monday is a public holiday this week
/// let calendar = calendar.with(Weekday::Mon, DayType::Holiday);
/// assert_eq!(calendar.day_type(Weekday::Mon), DayType::Holiday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCalendar {
    /// Indexed by days since Monday.
    days: [DayType; 7],
}

impl DayCalendar {
    /// Build a calendar from one day type per weekday, Monday first.
    pub fn new(days: [DayType; 7]) -> Self {
        Self { days }
    }

    /// Returns the day type for `day`.
    pub fn day_type(&self, day: Weekday) -> DayType {
        self.days[day.num_days_from_monday() as usize]
    }

    /// Returns a copy with `day` mapped to `day_type`.
    pub fn with(mut self, day: Weekday, day_type: DayType) -> Self {
        self.set(day, day_type);
        self
    }

    /// Map `day` to `day_type`.
    pub fn set(&mut self, day: Weekday, day_type: DayType) {
        self.days[day.num_days_from_monday() as usize] = day_type;
    }

    /// Weekdays mapped to `day_type`, Monday first.
    pub fn weekdays_of(&self, day_type: DayType) -> Vec<Weekday> {
        let mut day = Weekday::Mon;
        let mut out = Vec::new();
        for mapped in self.days {
            if mapped == day_type {
                out.push(day);
            }
            day = day.succ();
        }
        out
    }
}

impl Default for DayCalendar {
    /// Monday to Friday are weekdays, Saturday is Saturday, Sunday is a holiday.
    fn default() -> Self {
        Self::new([
            DayType::Weekday,
            DayType::Weekday,
            DayType::Weekday,
            DayType::Weekday,
            DayType::Weekday,
            DayType::Saturday,
            DayType::Holiday,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calendar() {
        let c = DayCalendar::default();
        assert_eq!(
            c.weekdays_of(DayType::Weekday),
            [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
        );
        assert_eq!(c.weekdays_of(DayType::Saturday), [Weekday::Sat]);
        assert_eq!(c.weekdays_of(DayType::Holiday), [Weekday::Sun]);
    }

    #[test]
    fn overrides_do_not_touch_other_days() {
        let mut c = DayCalendar::default();
        c.set(Weekday::Sat, DayType::Holiday);
        assert_eq!(c.day_type(Weekday::Sat), DayType::Holiday);
        assert_eq!(c.day_type(Weekday::Fri), DayType::Weekday);
        assert!(c.weekdays_of(DayType::Saturday).is_empty());
    }

    #[test]
    fn day_type_serde() {
        assert_eq!(serde_json::to_string(&DayType::Saturday).unwrap(), "\"saturday\"");
        let parsed: DayType = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(parsed, DayType::Holiday);
        assert!(serde_json::from_str::<DayType>("\"sunday\"").is_err());
    }

    #[test]
    fn display_matches_serde() {
        for day_type in DayType::ALL {
            assert_eq!(
                format!("\"{day_type}\""),
                serde_json::to_string(&day_type).unwrap()
            );
        }
    }
}
