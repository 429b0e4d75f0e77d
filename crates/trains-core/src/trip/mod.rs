//! Trip entity: a walk through the route graph from a start city
//!
//! A trip records its start city, the cities visited after it, the distance
//! travelled so far and where it stands in the current search. Identity and
//! ordering only look at the cities: two trips over the same cities are the
//! same trip whatever their distance or state.

mod steps;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use steps::StepList;

/// Where a trip stands in the search that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripState {
    /// Still eligible for expansion
    #[default]
    Open,
    /// Satisfied the query's acceptance rule
    Complete,
    /// Cannot reach the destination under the active rule; never returned
    NoRoute,
}

#[derive(Debug, Clone)]
pub struct Trip {
    start: Arc<str>,
    steps: StepList,
    distance: u32,
    state: TripState,
}

impl Trip {
    /// An empty, open trip standing at `start`
    pub fn new(start: &str) -> Self {
        Trip {
            start: Arc::from(start),
            steps: StepList::new(),
            distance: 0,
            state: TripState::Open,
        }
    }

    /// A new open trip that continues this one to `city` over a route of
    /// length `distance`. `self` is not modified and the two trips share no
    /// mutable state.
    ///
    /// Returns `None` when the total distance would not fit in a `u32`.
    pub fn extend(&self, city: &str, distance: u32) -> Option<Trip> {
        Some(Trip {
            start: Arc::clone(&self.start),
            steps: self.steps.push(city),
            distance: self.distance.checked_add(distance)?,
            state: TripState::Open,
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    /// Cities visited after the start, in order
    pub fn steps(&self) -> Vec<&str> {
        self.steps.to_vec()
    }

    /// Start city followed by every step
    pub fn cities(&self) -> Vec<&str> {
        let mut cities = Vec::with_capacity(self.steps.len() + 1);
        cities.push(self.start());
        cities.extend(self.steps.to_vec());
        cities
    }

    /// Number of steps (edges travelled)
    pub fn stops(&self) -> usize {
        self.steps.len()
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Last step, or the start city when no step has been taken
    pub fn position(&self) -> &str {
        self.steps.last().unwrap_or(&*self.start)
    }

    /// Cities in the step list (the start city is not included)
    pub fn visited(&self) -> HashSet<&str> {
        self.steps.iter_rev().collect()
    }

    pub fn state(&self) -> TripState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TripState::Complete
    }

    /// False once the search has given up on this trip
    pub fn has_route(&self) -> bool {
        self.state != TripState::NoRoute
    }

    pub(crate) fn mark_complete(&mut self) {
        self.state = TripState::Complete;
    }

    pub(crate) fn mark_no_route(&mut self) {
        self.state = TripState::NoRoute;
    }

    /// Start city and steps joined without a delimiter, e.g. `CDC`
    ///
    /// Display form only: ordering and equality compare city sequences, so
    /// multi-character names that concatenate alike stay distinct.
    pub fn canonical(&self) -> String {
        let mut out = String::from(self.start());
        for city in self.steps.to_vec() {
            out.push_str(city);
        }
        out
    }
}

impl PartialEq for Trip {
    fn eq(&self, other: &Self) -> bool {
        self.steps.len() == other.steps.len()
            && self.start == other.start
            && self.steps.iter_rev().eq(other.steps.iter_rev())
    }
}

impl Eq for Trip {}

impl Hash for Trip {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.steps.len().hash(state);
        for city in self.steps.iter_rev() {
            city.hash(state);
        }
    }
}

impl PartialOrd for Trip {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic over `[start, step1, step2, ...]`; a prefix sorts first
impl Ord for Trip {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.steps.cmp_in_order(&other.steps))
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl Serialize for Trip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Trip", 5)?;
        s.serialize_field("route", &self.canonical())?;
        s.serialize_field("start", self.start())?;
        s.serialize_field("steps", &self.steps())?;
        s.serialize_field("distance", &self.distance)?;
        s.serialize_field("stops", &self.stops())?;
        s.end()
    }
}

#[cfg(test)]
impl Trip {
    /// Build a trip from `start` over `(city, distance)` legs
    pub(crate) fn from_legs(start: &str, legs: &[(&str, u32)]) -> Trip {
        legs.iter().fold(Trip::new(start), |trip, (city, distance)| {
            trip.extend(city, *distance)
                .expect("test legs fit in a u32 distance")
        })
    }
}
