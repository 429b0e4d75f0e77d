//! Ordered, deduplicated result collection

use std::collections::btree_set;
use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

use crate::trip::Trip;

/// Completed trips sorted by route and free of duplicates
#[derive(Debug, Clone, Default)]
pub struct TripSet {
    trips: BTreeSet<Trip>,
    truncated: bool,
}

impl TripSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trip; returns false if a trip over the same cities is present
    pub(crate) fn insert(&mut self, trip: Trip) -> bool {
        debug_assert!(trip.is_complete(), "only completed trips are results");
        self.trips.insert(trip)
    }

    pub(crate) fn mark_truncated(&mut self) {
        self.truncated = true;
    }

    /// Keep only the trips matching `keep`
    pub fn retain(mut self, keep: impl FnMut(&Trip) -> bool) -> Self {
        self.trips.retain(keep);
        self
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// True when the search hit its iteration cap before finishing
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn first(&self) -> Option<&Trip> {
        self.trips.first()
    }

    /// Trip with the smallest distance; ties go to the first trip in route
    /// order
    pub fn shortest(&self) -> Option<&Trip> {
        self.trips.iter().min_by_key(|trip| trip.distance())
    }

    /// Display forms in result order
    pub fn canonical(&self) -> Vec<String> {
        self.trips.iter().map(Trip::canonical).collect()
    }
}

impl<'a> IntoIterator for &'a TripSet {
    type Item = &'a Trip;
    type IntoIter = btree_set::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

impl Serialize for TripSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.trips)
    }
}
