//! The lookup engine.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use tracing::{debug, trace};

use super::calendar::{DayCalendar, DayType};
use super::classify::{Urgency, classify};
use super::clock::{Clock, SystemClock};
use super::error::CatcherError;
use super::result::LookupResult;
use crate::domain::{Departure, MinuteOfDay};
use crate::schedule::{DestinationFilter, Schedule};

/// A lookup stops scanning once this many good departures are found: the
/// train to catch, plus the one after it.
pub const GOOD_DEPARTURES: usize = 2;

/// Walking parameters for a [`TrainCatcher`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatcherConfig {
    /// Minutes needed to reach the platform.
    pub walk_time: u32,

    /// Extra minutes of slack wanted on top of the walk.
    pub wiggle: u32,
}

impl CatcherConfig {
    /// Create a new configuration.
    pub fn new(walk_time: u32, wiggle: u32) -> Self {
        Self { walk_time, wiggle }
    }
}

/// Where a schedule comes from.
#[derive(Debug, Clone)]
pub enum ScheduleSource {
    /// An already built schedule.
    Schedule(Schedule),
    /// A timetable file to load.
    File(PathBuf),
    /// Timetable text to parse.
    Text(String),
}

impl ScheduleSource {
    fn into_schedule(self) -> Result<Schedule, CatcherError> {
        Ok(match self {
            ScheduleSource::Schedule(schedule) => schedule,
            ScheduleSource::File(path) => Schedule::load(path)?,
            ScheduleSource::Text(text) => Schedule::parse(&text)?,
        })
    }
}

impl From<Schedule> for ScheduleSource {
    fn from(schedule: Schedule) -> Self {
        ScheduleSource::Schedule(schedule)
    }
}

impl From<PathBuf> for ScheduleSource {
    fn from(path: PathBuf) -> Self {
        ScheduleSource::File(path)
    }
}

impl From<&Path> for ScheduleSource {
    fn from(path: &Path) -> Self {
        ScheduleSource::File(path.to_path_buf())
    }
}

/// Answers "which train should I go for right now?".
///
/// Holds one schedule per day type, a calendar saying which day type each
/// weekday uses, the rider's walk time and wiggle, and the set of
/// destinations worth catching.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use train_catcher::catcher::{CatcherConfig, DayCalendar, DayType, ScheduleSource, TrainCatcher};
/// use train_catcher::domain::MinuteOfDay;
///
/// let mut catcher = TrainCatcher::new(CatcherConfig::new(6, 3), DayCalendar::default());
/// catcher
///     .set_schedule(
///         [DayType::Weekday],
///         ScheduleSource::Text("Weekdays\n8\n05浦\n08川\n12浦\n20宮\n30浦\n".into()),
///     )
///     .unwrap();
///
/// let now = MinuteOfDay::from_hm(8, 0).unwrap();
/// let result = catcher.lookup(Some(now), Some(Weekday::Tue)).unwrap();
/// assert_eq!(result.uncatchable().len(), 1);
/// assert_eq!(result.maybe().len(), 1);
/// assert_eq!(result.next_good().unwrap().to_string(), "08:12 浦");
///
/// // Nothing configured for Sundays
/// assert!(catcher.lookup(Some(now), Some(Weekday::Sun)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TrainCatcher<C = SystemClock> {
    config: CatcherConfig,
    calendar: DayCalendar,
    schedules: HashMap<DayType, Schedule>,
    good_destinations: DestinationFilter,
    clock: C,
}

impl TrainCatcher<SystemClock> {
    /// Create a catcher that reads the local wall clock.
    pub fn new(config: CatcherConfig, calendar: DayCalendar) -> Self {
        Self::with_clock(config, calendar, SystemClock)
    }
}

impl<C: Clock> TrainCatcher<C> {
    /// Create a catcher with a custom time source.
    pub fn with_clock(config: CatcherConfig, calendar: DayCalendar, clock: C) -> Self {
        Self {
            config,
            calendar,
            schedules: HashMap::new(),
            good_destinations: DestinationFilter::All,
            clock,
        }
    }

    /// Use the schedule from `source` for each of `day_types`.
    ///
    /// The source is fully parsed before anything changes; on error the
    /// previous configuration is left as it was. Each day type gets its own
    /// copy of the schedule.
    pub fn set_schedule(
        &mut self,
        day_types: impl IntoIterator<Item = DayType>,
        source: impl Into<ScheduleSource>,
    ) -> Result<(), CatcherError> {
        let schedule = source.into().into_schedule()?;
        for day_type in day_types {
            debug!(
                %day_type,
                title = schedule.title(),
                departures = schedule.len(),
                "configured schedule"
            );
            self.schedules.insert(day_type, schedule.clone());
        }
        Ok(())
    }

    /// The schedule configured for `day_type`, if any.
    pub fn schedule(&self, day_type: DayType) -> Option<&Schedule> {
        self.schedules.get(&day_type)
    }

    /// The day type and schedule used on `day`.
    pub fn schedule_for(&self, day: Weekday) -> Result<(DayType, &Schedule), CatcherError> {
        let day_type = self.calendar.day_type(day);
        let schedule = self
            .schedules
            .get(&day_type)
            .ok_or(CatcherError::Unconfigured {
                weekday: day,
                day_type,
            })?;
        Ok((day_type, schedule))
    }

    /// Replace the set of destinations worth catching.
    pub fn set_good_destinations(&mut self, filter: DestinationFilter) {
        self.good_destinations = filter;
    }

    /// The destinations worth catching.
    pub fn good_destinations(&self) -> &DestinationFilter {
        &self.good_destinations
    }

    /// Set the minutes needed to reach the platform.
    pub fn set_walk_time(&mut self, minutes: u32) {
        self.config.walk_time = minutes;
    }

    /// Set the minutes of slack wanted on top of the walk.
    pub fn set_wiggle(&mut self, minutes: u32) {
        self.config.wiggle = minutes;
    }

    /// The walking parameters.
    pub fn config(&self) -> CatcherConfig {
        self.config
    }

    /// The weekday to day type mapping.
    pub fn calendar(&self) -> &DayCalendar {
        &self.calendar
    }

    /// Fill in a missing time or day from the clock.
    ///
    /// The clock is only read when something is missing.
    fn resolve(&self, time: Option<MinuteOfDay>, day: Option<Weekday>) -> (MinuteOfDay, Weekday) {
        match (time, day) {
            (Some(time), Some(day)) => (time, day),
            _ => {
                let (now, today) = self.clock.today();
                (time.unwrap_or(now), day.unwrap_or(today))
            }
        }
    }

    /// Classify the day's departures as seen at `time` on `day`.
    ///
    /// A missing `time` or `day` is taken from the clock. Only departures
    /// to good destinations are considered. Scanning stops once
    /// [`GOOD_DEPARTURES`] good departures have been found; the
    /// uncatchable and maybe trains before them are kept.
    ///
    /// A day with no trains left gives an empty result, not an error.
    pub fn lookup(
        &self,
        time: Option<MinuteOfDay>,
        day: Option<Weekday>,
    ) -> Result<LookupResult, CatcherError> {
        let (time, day) = self.resolve(time, day);
        let (day_type, schedule) = self.schedule_for(day)?;
        let CatcherConfig { walk_time, wiggle } = self.config;

        debug!(%day, %day_type, %time, walk_time, wiggle, "lookup");

        let mut result = LookupResult::new(time, day, day_type);

        // Everything before this point has already left
        let start = schedule.departures().partition_point(|d| d.time() < time);

        for dep in &schedule.departures()[start..] {
            if !self.good_destinations.matches(dep.destination()) {
                continue;
            }

            let urgency = classify(dep, time, walk_time, wiggle);
            trace!(departure = %dep, %urgency, "classified");

            result.push(urgency, dep.clone());
            if urgency == Urgency::Good && result.good().len() >= GOOD_DEPARTURES {
                trace!(departure = %dep, "enough good departures, stopping");
                break;
            }
        }

        debug!(
            uncatchable = result.uncatchable().len(),
            maybe = result.maybe().len(),
            good = result.good().len(),
            "lookup done"
        );

        Ok(result)
    }

    /// Classify departures as seen right now.
    pub fn lookup_now(&self) -> Result<LookupResult, CatcherError> {
        self.lookup(None, None)
    }

    /// The first good-destination departure leaving strictly after
    /// `time + walk_time`, ignoring the wiggle.
    ///
    /// Returns `Ok(None)` when the day has no such train left.
    pub fn next_train(
        &self,
        time: Option<MinuteOfDay>,
        day: Option<Weekday>,
    ) -> Result<Option<Departure>, CatcherError> {
        let (time, day) = self.resolve(time, day);
        let (_, schedule) = self.schedule_for(day)?;

        let Some(at_platform) = time.checked_add(self.config.walk_time) else {
            return Ok(None);
        };
        Ok(schedule
            .next_departure(at_platform, &self.good_destinations)
            .cloned())
    }
}
