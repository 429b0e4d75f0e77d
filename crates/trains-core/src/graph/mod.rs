//! Route graph storage and adjacency
//!
//! - `RouteGraph`: the in-memory edge store
//! - `RouteProvider`: the adjacency seam the trip search runs against
//! - route-list parsing for the `AB5, BC4` input form

pub mod parse;
pub mod route_graph;
pub mod traversal;
pub mod types;

pub use parse::{parse_route, parse_routes};
pub use route_graph::RouteGraph;
pub use traversal::RouteProvider;
pub use types::{Hop, Route};
