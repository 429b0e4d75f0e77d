//! Trip search over a route graph
//!
//! Every enumeration query runs the same breadth-first worklist: a FIFO
//! queue seeded with an empty trip at the start city. Each trip taken off the
//! queue is extended by one hop per candidate edge allowed by the active
//! [`Constraint`], and every extension goes back on the queue so it can be
//! extended in turn. Trips are processed once, in non-decreasing stop count.
//! Only trips that satisfied the constraint's acceptance rule are kept.
//!
//! Termination depends on the rule: the simple-path rule never revisits a
//! city, the stop and distance rules stop extending once their bound is
//! reached. With zero-distance cycles the distance bound is never reached,
//! see [`PathExplorer::find_trips_max_distance`].

mod result;
mod rules;

use std::collections::VecDeque;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::bail_invalid;
use crate::error::{Result, TrainsError};
use crate::graph::RouteProvider;
use crate::trace_time;
use crate::trip::{Trip, TripState};

pub use result::TripSet;
pub use rules::Constraint;

/// Limits applied to every search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of worklist entries to process (None = unbounded)
    pub max_iterations: Option<usize>,
}

pub struct PathExplorer<'a> {
    provider: &'a dyn RouteProvider,
    options: SearchOptions,
}

impl<'a> PathExplorer<'a> {
    pub fn new(provider: &'a dyn RouteProvider) -> Self {
        Self::with_options(provider, SearchOptions::default())
    }

    pub fn with_options(provider: &'a dyn RouteProvider, options: SearchOptions) -> Self {
        PathExplorer { provider, options }
    }

    /// Distance of the direct route between two cities
    pub fn distance(&self, from: &str, to: &str) -> Result<u32> {
        self.provider.edge_weight(from, to)
    }

    /// Total distance along the given cities, failing on the first missing
    /// route or when the total does not fit in a `u32`. A single city is a
    /// zero-length route.
    pub fn route_distance(&self, cities: &[&str]) -> Result<u32> {
        if cities.is_empty() {
            bail_invalid!("route", "empty city list");
        }

        cities.windows(2).try_fold(0u32, |total, pair| {
            let leg = self.provider.edge_weight(pair[0], pair[1])?;
            total.checked_add(leg).ok_or_else(|| {
                TrainsError::invalid_value("route distance", cities.join("-"))
            })
        })
    }

    /// Every trip from `from` to `to` that repeats no city along its steps
    pub fn find_trips(&self, from: &str, to: &str) -> TripSet {
        self.search(from, to, Constraint::SimplePath)
    }

    /// Every trip from `from` to `to` with exactly `stops` stops, revisits
    /// allowed. With `stops == 0` the result is the empty trip when
    /// `from == to`, otherwise nothing.
    pub fn find_trips_equal_steps(&self, from: &str, to: &str, stops: usize) -> TripSet {
        self.search(from, to, Constraint::ExactStops(stops))
    }

    /// Simple-path trips from `from` to `to` with at most `stops` stops
    pub fn find_trips_max_steps(&self, from: &str, to: &str, stops: usize) -> TripSet {
        self.find_trips(from, to).retain(|trip| trip.stops() <= stops)
    }

    /// Every trip from `from` to `to` shorter than `max_distance`, revisits
    /// allowed.
    ///
    /// Routes must have non-zero distance around any cycle reachable from
    /// `from`: a zero-distance cycle never exhausts the budget and the search
    /// only ends at [`SearchOptions::max_iterations`], if set.
    pub fn find_trips_max_distance(&self, from: &str, to: &str, max_distance: u32) -> TripSet {
        self.search(from, to, Constraint::MaxDistance(max_distance))
    }

    /// Simple-path trip with the smallest distance; ties go to the trip that
    /// sorts first by route
    pub fn shortest_distance_trip(&self, from: &str, to: &str) -> Result<Trip> {
        self.find_trips(from, to)
            .shortest()
            .cloned()
            .ok_or_else(|| TrainsError::no_such_route(from, to))
    }

    #[tracing::instrument(skip(self), fields(max_iterations = ?self.options.max_iterations))]
    pub fn search(&self, from: &str, to: &str, constraint: Constraint) -> TripSet {
        let start = Instant::now();
        let mut results = TripSet::new();
        let mut queue: VecDeque<Trip> = VecDeque::new();

        let mut seed = Trip::new(from);
        if constraint.accepts(&seed, to) {
            seed.mark_complete();
        }
        queue.push_back(seed);

        let mut processed = 0usize;
        while let Some(mut trip) = queue.pop_front() {
            if let Some(max) = self.options.max_iterations {
                if processed >= max {
                    warn!(
                        processed,
                        queued = queue.len() + 1,
                        "search truncated at max_iterations"
                    );
                    queue.push_front(trip);
                    results.mark_truncated();
                    break;
                }
            }
            processed += 1;

            self.expand(&mut trip, to, constraint, &mut queue);
            if trip.is_complete() {
                results.insert(trip);
            }
        }

        // Completed trips still queued after truncation are valid results
        for trip in queue.into_iter().filter(Trip::is_complete) {
            results.insert(trip);
        }

        debug!(processed, results = results.len(), "search_complete");
        trace_time!(start, "search", results = results.len());
        results
    }

    /// Push one extension of `trip` per candidate hop, or mark it as having
    /// no route when it cannot go further
    fn expand(
        &self,
        trip: &mut Trip,
        to: &str,
        constraint: Constraint,
        queue: &mut VecDeque<Trip>,
    ) {
        match trip.state() {
            TripState::NoRoute => return,
            TripState::Complete if !constraint.expands_complete() => return,
            TripState::Complete | TripState::Open => {}
        }

        let candidates = if constraint.may_expand(trip) {
            constraint.candidates(self.provider, trip)
        } else {
            Vec::new()
        };

        if candidates.is_empty() {
            // A completed trip keeps its result even when it cannot loop on
            if !trip.is_complete() {
                trip.mark_no_route();
            }
            return;
        }

        for hop in candidates {
            let Some(mut next) = trip.extend(&hop.to, hop.distance) else {
                trace!(trip = %trip, to = %hop.to, "distance overflow, pruned");
                continue;
            };
            if constraint.accepts(&next, to) {
                next.mark_complete();
            }
            queue.push_back(next);
        }
    }
}
