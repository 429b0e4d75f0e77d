use serde::{Deserialize, Serialize};
use std::fmt;

/// A one-way route between two cities with its distance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub distance: u32,
}

impl Route {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: u32) -> Self {
        Route {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }

    /// True when both endpoints are single characters and the compact
    /// `AB5` token form applies
    pub fn is_compact(&self) -> bool {
        self.from.chars().count() == 1 && self.to.chars().count() == 1
    }
}

/// Formats as a route-list token that [`crate::graph::parse_routes`] accepts
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compact() {
            write!(f, "{}{}{}", self.from, self.to, self.distance)
        } else {
            write!(f, "{}-{}:{}", self.from, self.to, self.distance)
        }
    }
}

/// An outgoing edge as seen from its origin city
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub to: String,
    pub distance: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_display_compact() {
        assert_eq!(Route::new("A", "B", 5).to_string(), "AB5");
    }

    #[test]
    fn test_route_display_long_names() {
        assert_eq!(
            Route::new("Paris", "Lyon", 465).to_string(),
            "Paris-Lyon:465"
        );
    }
}
