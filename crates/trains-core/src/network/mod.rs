//! Route network facade
//!
//! [`Network`] owns the route graph and the search options and answers every
//! distance and trip query. Mutation takes `&mut self` and queries take
//! `&self`, so the graph cannot change while a query runs.

pub mod exam;

use crate::error::Result;
use crate::explorer::{PathExplorer, SearchOptions, TripSet};
use crate::graph::{parse_routes, Route, RouteGraph};
use crate::trip::Trip;

#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: RouteGraph,
    options: SearchOptions,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_graph(graph: RouteGraph) -> Self {
        Network {
            graph,
            options: SearchOptions::default(),
        }
    }

    /// Build a network from route-list text such as `AB5, BC4, CD8`
    pub fn from_route_list(input: &str) -> Result<Self> {
        let routes = parse_routes(input)?;
        Ok(Self::from_graph(RouteGraph::from_routes(routes)))
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn explorer(&self) -> PathExplorer<'_> {
        PathExplorer::with_options(&self.graph, self.options)
    }

    /// Add or overwrite the route between two cities
    pub fn add_route(&mut self, from: impl Into<String>, to: impl Into<String>, distance: u32) {
        self.graph.add_route(from, to, distance);
    }

    /// Add every route in order; later routes overwrite earlier ones
    pub fn extend_routes(&mut self, routes: impl IntoIterator<Item = Route>) {
        for route in routes {
            self.add_route(route.from, route.to, route.distance);
        }
    }

    pub fn distance(&self, from: &str, to: &str) -> Result<u32> {
        self.graph.edge_weight(from, to)
    }

    pub fn route_distance(&self, cities: &[&str]) -> Result<u32> {
        self.explorer().route_distance(cities)
    }

    pub fn find_trips(&self, from: &str, to: &str) -> TripSet {
        self.explorer().find_trips(from, to)
    }

    pub fn find_trips_equal_steps(&self, from: &str, to: &str, stops: usize) -> TripSet {
        self.explorer().find_trips_equal_steps(from, to, stops)
    }

    pub fn find_trips_max_steps(&self, from: &str, to: &str, stops: usize) -> TripSet {
        self.explorer().find_trips_max_steps(from, to, stops)
    }

    /// See [`PathExplorer::find_trips_max_distance`] for the zero-distance
    /// cycle caveat
    pub fn find_trips_max_distance(&self, from: &str, to: &str, max_distance: u32) -> TripSet {
        self.explorer().find_trips_max_distance(from, to, max_distance)
    }

    pub fn shortest_distance_trip(&self, from: &str, to: &str) -> Result<Trip> {
        self.explorer().shortest_distance_trip(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_route() {
        let mut network = Network::new();
        assert!(network.distance("A", "B").unwrap_err().is_no_such_route());

        network.add_route("A", "B", 5);
        assert_eq!(network.distance("A", "B").unwrap(), 5);

        network.add_route("A", "B", 7);
        assert_eq!(network.distance("A", "B").unwrap(), 7);
    }

    #[test]
    fn test_from_route_list() {
        let network = Network::from_route_list("AB5, BC4").unwrap();
        assert_eq!(network.route_distance(&["A", "B", "C"]).unwrap(), 9);
        assert_eq!(network.graph().len(), 2);
    }

    #[test]
    fn test_extend_routes_last_write_wins() {
        let mut network = Network::new();
        network.extend_routes(vec![Route::new("A", "B", 5), Route::new("A", "B", 7)]);
        assert_eq!(network.distance("A", "B").unwrap(), 7);
    }

    #[test]
    fn test_options_reach_explorer() {
        let network = Network::from_route_list("AB0, BA0")
            .unwrap()
            .with_options(SearchOptions {
                max_iterations: Some(20),
            });
        assert_eq!(network.options().max_iterations, Some(20));
        assert!(network.find_trips_max_distance("A", "A", 1).truncated());
    }
}
