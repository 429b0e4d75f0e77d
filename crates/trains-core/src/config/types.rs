//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::explorer::SearchOptions;
use crate::graph::Route;

/// Network configuration, usually read from `network.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Route-list tokens such as `"AB5"` or `"Paris-Lyon:465"`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<String>,

    /// Explicit route tables, applied after `routes`
    #[serde(default, rename = "route", skip_serializing_if = "Vec::is_empty")]
    pub route_tables: Vec<Route>,

    /// Search limits
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for trip searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cap on processed worklist entries per search (unset = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

impl From<SearchConfig> for SearchOptions {
    fn from(config: SearchConfig) -> Self {
        SearchOptions {
            max_iterations: config.max_iterations,
        }
    }
}
