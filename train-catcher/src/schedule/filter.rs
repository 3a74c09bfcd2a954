//! Destination filters.

use std::collections::BTreeSet;

use crate::domain::Destination;

/// Which destinations a rider is interested in.
///
/// # Examples
///
/// ```
/// use train_catcher::domain::Destination;
/// use train_catcher::schedule::DestinationFilter;
///
/// let ura = Destination::parse("浦").unwrap();
/// let kawa = Destination::parse("川").unwrap();
///
/// let filter = DestinationFilter::only([ura.clone()]);
/// assert!(filter.matches(&ura));
/// assert!(!filter.matches(&kawa));
///
/// assert!(DestinationFilter::All.matches(&kawa));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DestinationFilter {
    /// Every destination is acceptable.
    #[default]
    All,
    /// Only the listed destinations are acceptable.
    Only(BTreeSet<Destination>),
}

impl DestinationFilter {
    /// Accept only the given destinations.
    pub fn only(destinations: impl IntoIterator<Item = Destination>) -> Self {
        DestinationFilter::Only(destinations.into_iter().collect())
    }

    /// Returns true if `destination` passes the filter.
    pub fn matches(&self, destination: &Destination) -> bool {
        match self {
            DestinationFilter::All => true,
            DestinationFilter::Only(set) => set.contains(destination),
        }
    }

    /// Returns true if the filter accepts everything.
    pub fn is_all(&self) -> bool {
        matches!(self, DestinationFilter::All)
    }
}

impl From<Option<Vec<Destination>>> for DestinationFilter {
    fn from(destinations: Option<Vec<Destination>>) -> Self {
        match destinations {
            None => DestinationFilter::All,
            Some(list) => DestinationFilter::only(list),
        }
    }
}

impl FromIterator<Destination> for DestinationFilter {
    fn from_iter<T: IntoIterator<Item = Destination>>(iter: T) -> Self {
        DestinationFilter::only(iter)
    }
}
