//! Per-query visitation, continuation and acceptance rules

use crate::graph::{Hop, RouteProvider};
use crate::trip::Trip;

/// The stopping constraint a search runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// No city repeated in the step list
    SimplePath,
    /// Exactly this many stops; revisits allowed
    ExactStops(usize),
    /// Total distance strictly below this bound; revisits allowed
    MaxDistance(u32),
}

impl Constraint {
    /// Outgoing hops from the trip's position that the rule lets it take
    pub fn candidates(&self, provider: &dyn RouteProvider, trip: &Trip) -> Vec<Hop> {
        match self {
            Constraint::SimplePath => provider.outgoing_excluding(trip.position(), &trip.visited()),
            Constraint::ExactStops(_) | Constraint::MaxDistance(_) => {
                provider.outgoing(trip.position())
            }
        }
    }

    /// Guard checked before a trip is extended
    pub fn may_expand(&self, trip: &Trip) -> bool {
        match *self {
            Constraint::SimplePath => true,
            Constraint::ExactStops(stops) => trip.stops() <= stops,
            Constraint::MaxDistance(max) => trip.distance() < max,
        }
    }

    /// Whether a trip is a result of the query ending at `to`
    pub fn accepts(&self, trip: &Trip, to: &str) -> bool {
        if trip.position() != to {
            return false;
        }
        match *self {
            Constraint::SimplePath => trip.stops() > 0,
            Constraint::ExactStops(stops) => trip.stops() == stops,
            Constraint::MaxDistance(max) => trip.stops() > 0 && trip.distance() < max,
        }
    }

    /// Completed trips keep looping only under a distance budget
    pub fn expands_complete(&self) -> bool {
        matches!(self, Constraint::MaxDistance(_))
    }
}
