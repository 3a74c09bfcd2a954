//! Departure urgency classification.

use std::fmt;

use serde::Serialize;

use crate::domain::{Departure, MinuteOfDay};

/// How a departure looks from a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Already left.
    Gone,
    /// Still scheduled, but there is not enough time to walk there.
    Uncatchable,
    /// Reachable on foot, but only by eating into the safety margin.
    Maybe,
    /// Reachable with the full safety margin to spare.
    Good,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Urgency::Gone => "gone",
            Urgency::Uncatchable => "uncatchable",
            Urgency::Maybe => "maybe",
            Urgency::Good => "good",
        })
    }
}

/// Classify `departure` as seen at `now` by someone `walk_time` minutes from
/// the platform who wants `wiggle` minutes of slack.
///
/// All boundaries are strict: a train leaving exactly `walk_time` minutes
/// from now is uncatchable, and one leaving exactly `walk_time + wiggle`
/// minutes from now is only a maybe.
///
/// # Examples
///
/// ```
/// use train_catcher::catcher::{Urgency, classify};
/// use train_catcher::domain::{Departure, Destination, MinuteOfDay};
///
/// let now = MinuteOfDay::MIDNIGHT;
/// let at = |m| Departure::new(MinuteOfDay::new(m).unwrap(), Destination::parse("浦").unwrap());
///
/// assert_eq!(classify(&at(5), now, 6, 3), Urgency::Uncatchable);
/// assert_eq!(classify(&at(8), now, 6, 3), Urgency::Maybe);
/// assert_eq!(classify(&at(10), now, 6, 3), Urgency::Good);
/// ```
pub fn classify(departure: &Departure, now: MinuteOfDay, walk_time: u32, wiggle: u32) -> Urgency {
    let now = now.minutes();
    let leaves = departure.minutes_from_midnight();

    // Sums can exceed the end of the day; that just means "not reachable today".
    let arrive = now.saturating_add(walk_time);
    let arrive_with_slack = arrive.saturating_add(wiggle);

    if now > leaves {
        Urgency::Gone
    } else if arrive_with_slack < leaves {
        Urgency::Good
    } else if arrive < leaves {
        Urgency::Maybe
    } else {
        Urgency::Uncatchable
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Destination;
    use proptest::prelude::*;

    fn at(minutes: u32) -> Departure {
        Departure::new(
            MinuteOfDay::new(minutes).unwrap(),
            Destination::parse("川").unwrap(),
        )
    }

    proptest! {
        /// Later departures never look more urgent than earlier ones
        #[test]
        fn monotonic_in_departure_time(
            q in 0u32..1440,
            a in 0u32..1440,
            b in 0u32..1440,
            walk in 0u32..60,
            wiggle in 0u32..30,
        ) {
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            let now = MinuteOfDay::new(q).unwrap();
            let rank = |u: Urgency| match u {
                Urgency::Gone => 0,
                Urgency::Uncatchable => 1,
                Urgency::Maybe => 2,
                Urgency::Good => 3,
            };
            prop_assert!(
                rank(classify(&at(early), now, walk, wiggle))
                    <= rank(classify(&at(late), now, walk, wiggle))
            );
        }

        /// Good always means the full walk and wiggle fit before departure
        #[test]
        fn good_leaves_full_margin(
            q in 0u32..1440,
            d in 0u32..1440,
            walk in 0u32..60,
            wiggle in 0u32..30,
        ) {
            let urgency = classify(&at(d), MinuteOfDay::new(q).unwrap(), walk, wiggle);
            prop_assert_eq!(urgency == Urgency::Good, q + walk + wiggle < d);
            prop_assert_eq!(urgency == Urgency::Gone, q > d);
        }
    }
}
