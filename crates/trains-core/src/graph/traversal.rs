use std::collections::HashSet;

use crate::error::Result;
use crate::graph::route_graph::RouteGraph;
use crate::graph::types::Hop;

/// Trait for providing route adjacency to the trip search
///
/// Implementations must list outgoing hops sorted by destination so that
/// search order, and therefore result order, is reproducible.
pub trait RouteProvider {
    fn edge_weight(&self, from: &str, to: &str) -> Result<u32>;
    fn outgoing(&self, from: &str) -> Vec<Hop>;

    fn outgoing_excluding(&self, from: &str, visited: &HashSet<&str>) -> Vec<Hop> {
        self.outgoing(from)
            .into_iter()
            .filter(|hop| !visited.contains(hop.to.as_str()))
            .collect()
    }
}

impl RouteProvider for RouteGraph {
    fn edge_weight(&self, from: &str, to: &str) -> Result<u32> {
        self.edge_weight(from, to)
    }

    fn outgoing(&self, from: &str) -> Vec<Hop> {
        self.outgoing(from)
    }

    fn outgoing_excluding(&self, from: &str, visited: &HashSet<&str>) -> Vec<Hop> {
        self.outgoing_excluding(from, visited)
    }
}
