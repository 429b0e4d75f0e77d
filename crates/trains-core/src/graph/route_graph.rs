//! In-memory route store

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::trace;

use crate::error::{Result, TrainsError};
use crate::graph::types::{Hop, Route};

/// Directed, weighted graph of cities keyed by ordered (origin, destination)
///
/// Destinations are kept in a `BTreeMap` per origin, so outgoing edges are
/// always enumerated sorted by destination regardless of insertion order.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    routes: BTreeMap<String, BTreeMap<String, u32>>,
    edge_count: usize,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of routes; later routes overwrite earlier
    /// ones for the same city pair
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut graph = Self::new();
        for route in routes {
            graph.add_route(route.from, route.to, route.distance);
        }
        graph
    }

    /// Insert or overwrite the route from `from` to `to`
    pub fn add_route(&mut self, from: impl Into<String>, to: impl Into<String>, distance: u32) {
        let from = from.into();
        let to = to.into();
        trace!(from = %from, to = %to, distance, "add_route");

        let previous = self
            .routes
            .entry(from)
            .or_default()
            .insert(to, distance);
        if previous.is_none() {
            self.edge_count += 1;
        }
    }

    /// Distance of the direct route, or `NoSuchRoute`
    pub fn edge_weight(&self, from: &str, to: &str) -> Result<u32> {
        self.routes
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
            .ok_or_else(|| TrainsError::no_such_route(from, to))
    }

    /// All routes leaving `from`, sorted by destination
    pub fn outgoing(&self, from: &str) -> Vec<Hop> {
        self.outgoing_excluding(from, &HashSet::new())
    }

    /// Routes leaving `from` whose destination is not in `visited`, sorted by
    /// destination
    pub fn outgoing_excluding(&self, from: &str, visited: &HashSet<&str>) -> Vec<Hop> {
        let Some(targets) = self.routes.get(from) else {
            return Vec::new();
        };

        targets
            .iter()
            .filter(|(to, _)| !visited.contains(to.as_str()))
            .map(|(to, &distance)| Hop {
                to: to.clone(),
                distance,
            })
            .collect()
    }

    /// Every stored route, ordered by origin then destination
    pub fn routes(&self) -> impl Iterator<Item = Route> + '_ {
        self.routes.iter().flat_map(|(from, targets)| {
            targets
                .iter()
                .map(move |(to, &distance)| Route::new(from.clone(), to.clone(), distance))
        })
    }

    /// Every city appearing as an origin or a destination, sorted
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: BTreeSet<&str> = BTreeSet::new();
        for (from, targets) in &self.routes {
            cities.insert(from.as_str());
            cities.extend(targets.keys().map(String::as_str));
        }
        cities.into_iter().collect()
    }

    /// Number of stored routes
    pub fn len(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_lookup_fails() {
        let graph = RouteGraph::new();
        let err = graph.edge_weight("A", "B").unwrap_err();
        assert!(err.is_no_such_route());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_route_overwrites() {
        let mut graph = RouteGraph::new();
        graph.add_route("A", "B", 5);
        assert_eq!(graph.edge_weight("A", "B").unwrap(), 5);

        graph.add_route("A", "B", 7);
        assert_eq!(graph.edge_weight("A", "B").unwrap(), 7);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.outgoing("A").len(), 1);
    }

    #[test]
    fn test_routes_are_directed() {
        let mut graph = RouteGraph::new();
        graph.add_route("A", "B", 5);
        assert!(graph.edge_weight("B", "A").is_err());
    }

    #[test]
    fn test_outgoing_sorted_by_destination() {
        let mut graph = RouteGraph::new();
        graph.add_route("A", "E", 7);
        graph.add_route("A", "B", 5);
        graph.add_route("A", "D", 5);

        let targets: Vec<String> = graph.outgoing("A").into_iter().map(|h| h.to).collect();
        assert_eq!(targets, vec!["B", "D", "E"]);
    }

    #[test]
    fn test_outgoing_excluding_visited() {
        let mut graph = RouteGraph::new();
        graph.add_route("C", "D", 8);
        graph.add_route("C", "E", 2);

        let visited: HashSet<&str> = ["D"].into_iter().collect();
        let hops = graph.outgoing_excluding("C", &visited);
        assert_eq!(
            hops,
            vec![Hop {
                to: "E".to_string(),
                distance: 2
            }]
        );
    }

    #[test]
    fn test_outgoing_unknown_city_is_empty() {
        let graph = RouteGraph::from_routes(vec![Route::new("A", "B", 1)]);
        assert!(graph.outgoing("Z").is_empty());
    }

    #[test]
    fn test_cities_and_routes() {
        let graph = RouteGraph::from_routes(vec![
            Route::new("B", "C", 4),
            Route::new("A", "B", 5),
        ]);
        assert_eq!(graph.cities(), vec!["A", "B", "C"]);

        let tokens: Vec<String> = graph.routes().map(|r| r.to_string()).collect();
        assert_eq!(tokens, vec!["AB5", "BC4"]);
    }
}
