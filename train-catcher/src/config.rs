//! JSON settings file for wiring up a [`TrainCatcher`].
//!
//! ```json
//! {
//!   "walk_time": 6,
//!   "wiggle": 2,
//!   "good_destinations": ["浦", "川", "宮", "赤", "池"],
//!   "calendar": { "monday": "holiday" },
//!   "schedules": {
//!     "weekday": "weekdays.txt",
//!     "saturday": "saturdays.txt",
//!     "holiday": "holidays.txt"
//!   }
//! }
//! ```
//!
//! Relative timetable paths are resolved against the directory holding the
//! settings file. `calendar` only lists overrides of the default
//! Monday-Friday / Saturday / Sunday-holiday mapping.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::Deserialize;
use tracing::info;

use crate::catcher::{
    CatcherConfig, CatcherError, Clock, DayCalendar, DayType, SystemClock, TrainCatcher,
};
use crate::domain::Destination;
use crate::schedule::DestinationFilter;

/// Errors from reading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read
    #[error("failed to read settings {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`Settings`]
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured timetable could not be loaded
    #[error(transparent)]
    Catcher(#[from] CatcherError),
}

/// Contents of a settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Minutes needed to reach the platform.
    #[serde(default)]
    pub walk_time: u32,

    /// Extra minutes of slack wanted on top of the walk.
    #[serde(default)]
    pub wiggle: u32,

    /// Destinations worth catching; `null` or missing means all.
    #[serde(default)]
    pub good_destinations: Option<Vec<Destination>>,

    /// Weekday overrides on top of the default calendar.
    #[serde(default)]
    pub calendar: HashMap<Weekday, DayType>,

    /// Timetable file for each day type.
    #[serde(default)]
    pub schedules: BTreeMap<DayType, PathBuf>,

    /// Directory relative timetable paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_json(&text, base_dir)
    }

    /// Parse settings from JSON text.
    pub fn from_json(text: &str, base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut settings: Settings = serde_json::from_str(text)?;
        settings.base_dir = base_dir.into();
        Ok(settings)
    }

    /// The walking parameters.
    pub fn catcher_config(&self) -> CatcherConfig {
        CatcherConfig::new(self.walk_time, self.wiggle)
    }

    /// The default calendar with this file's overrides applied.
    pub fn day_calendar(&self) -> DayCalendar {
        self.calendar
            .iter()
            .fold(DayCalendar::default(), |cal, (day, day_type)| {
                cal.with(*day, *day_type)
            })
    }

    /// The good-destination filter.
    pub fn destination_filter(&self) -> DestinationFilter {
        DestinationFilter::from(self.good_destinations.clone())
    }

    /// Full path of the timetable configured for `day_type`.
    pub fn schedule_path(&self, day_type: DayType) -> Option<PathBuf> {
        self.schedules
            .get(&day_type)
            .map(|path| self.base_dir.join(path))
    }

    /// Build a catcher reading the local wall clock.
    pub fn build(&self) -> Result<TrainCatcher<SystemClock>, ConfigError> {
        self.build_with_clock(SystemClock)
    }

    /// Build a catcher with a custom time source, loading every timetable.
    pub fn build_with_clock<C: Clock>(&self, clock: C) -> Result<TrainCatcher<C>, ConfigError> {
        let mut catcher =
            TrainCatcher::with_clock(self.catcher_config(), self.day_calendar(), clock);

        for day_type in self.schedules.keys().copied() {
            if let Some(path) = self.schedule_path(day_type) {
                info!(%day_type, path = %path.display(), "loading timetable");
                catcher.set_schedule([day_type], path)?;
            }
        }

        catcher.set_good_destinations(self.destination_filter());
        Ok(catcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catcher::FixedClock;
    use crate::domain::MinuteOfDay;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    const SETTINGS: &str = r#"{
        "walk_time": 6,
        "wiggle": 2,
        "good_destinations": ["浦", "池"],
        "calendar": { "monday": "holiday" },
        "schedules": {
            "weekday": "weekdays.txt",
            "holiday": "holidays.txt"
        }
    }"#;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 13)
                .unwrap()
                .and_hms_opt(7, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn parse_settings() {
        let s = Settings::from_json(SETTINGS, "/timetables").unwrap();
        assert_eq!(s.catcher_config(), CatcherConfig::new(6, 2));
        assert_eq!(s.day_calendar().day_type(Weekday::Mon), DayType::Holiday);
        assert_eq!(s.day_calendar().day_type(Weekday::Tue), DayType::Weekday);
        assert_eq!(
            s.schedule_path(DayType::Weekday).unwrap(),
            PathBuf::from("/timetables/weekdays.txt")
        );
        assert!(s.schedule_path(DayType::Saturday).is_none());

        let filter = s.destination_filter();
        assert!(filter.matches(&Destination::parse("池").unwrap()));
        assert!(!filter.matches(&Destination::parse("川").unwrap()));
    }

    #[test]
    fn defaults_for_missing_fields() {
        let s = Settings::from_json("{}", "").unwrap();
        assert_eq!(s.catcher_config(), CatcherConfig::default());
        assert_eq!(s.day_calendar(), DayCalendar::default());
        assert!(s.destination_filter().is_all());
        assert!(s.schedules.is_empty());
    }

    #[test]
    fn absolute_paths_are_kept() {
        let s = Settings::from_json(
            r#"{ "schedules": { "saturday": "/srv/sat.txt" } }"#,
            "/elsewhere",
        )
        .unwrap();
        assert_eq!(
            s.schedule_path(DayType::Saturday).unwrap(),
            PathBuf::from("/srv/sat.txt")
        );
    }

    #[test]
    fn reject_unknown_fields_and_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "walk": 6 }"#, ""),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "good_destinations": [""] }"#, ""),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "schedules": { "sunday": "x.txt" } }"#, ""),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn load_and_build() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("weekdays.txt"), "Weekdays\n7\n05池\n10川\n20浦\n").unwrap();
        std::fs::write(dir.path().join("holidays.txt"), "Holidays\n9\n00浦\n30浦\n").unwrap();
        let settings_path = dir.path().join("catcher.json");
        std::fs::write(&settings_path, SETTINGS).unwrap();

        let settings = Settings::load(&settings_path).unwrap();
        let catcher = settings.build_with_clock(clock()).unwrap();

        // Wednesday at 07:00 from the clock
        let r = catcher.lookup_now().unwrap();
        assert_eq!(r.uncatchable().len(), 1);
        assert_eq!(r.good().len(), 1);
        assert_eq!(r.good()[0].to_string(), "07:20 浦");

        // Monday is mapped to the holiday timetable
        let r = catcher
            .lookup(Some(MinuteOfDay::from_hm(8, 0).unwrap()), Some(Weekday::Mon))
            .unwrap();
        assert_eq!(r.day_type(), DayType::Holiday);
        assert_eq!(r.good().len(), 2);
    }

    #[test]
    fn build_fails_on_missing_timetable() {
        let dir = tempdir().unwrap();
        let settings = Settings::from_json(SETTINGS, dir.path()).unwrap();
        assert!(matches!(
            settings.build_with_clock(clock()),
            Err(ConfigError::Catcher(CatcherError::InvalidSchedule(_)))
        ));
    }

    #[test]
    fn bundled_timetables_load() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("timetables/catcher.json");
        let catcher = Settings::load(path).unwrap().build_with_clock(clock()).unwrap();

        for day_type in DayType::ALL {
            let schedule = catcher.schedule(day_type).unwrap();
            assert!(!schedule.is_empty());
        }

        // Wednesday 07:00, walk 6, wiggle 2
        let r = catcher.lookup_now().unwrap();
        assert_eq!(
            r.to_string(),
            "Wednesday 07:00\nBad:\n  07:02 浦\nGood:\n  07:09 川\n  07:18 宮"
        );
    }

    #[test]
    fn load_missing_settings_file() {
        assert!(matches!(
            Settings::load("/nonexistent/catcher.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
