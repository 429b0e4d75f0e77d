//! Network configuration for trains
//!
//! A network file is TOML:
//!
//! ```toml
//! routes = ["AB5", "BC4"]
//!
//! [[route]]
//! from = "Alpha"
//! to = "Beta"
//! distance = 12
//!
//! [search]
//! max_iterations = 100000
//! ```

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TrainsError};
use crate::graph::parse_route;
use crate::network::Network;

pub use types::{NetworkConfig, SearchConfig};

const CONFIG_DIR: &str = "trains";
const CONFIG_FILE: &str = "network.toml";
const CONFIG_ENV_VAR: &str = "TRAINS_CONFIG";

impl NetworkConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TrainsError::Other(format!(
                "failed to read network config from {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), "load_config");
        Self::from_toml_str(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrainsError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Locate the config file to use: an explicit path, then `TRAINS_CONFIG`,
    /// then `<config dir>/trains/network.toml` when it exists
    pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            if !env_path.is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
            .filter(|path| path.exists())
    }

    /// Build a network from the configured routes; list tokens first, then
    /// route tables, so tables win for a repeated city pair
    pub fn into_network(self) -> Result<Network> {
        let mut network = Network::new().with_options(self.search.into());
        for token in &self.routes {
            let route = parse_route(token)?;
            network.add_route(route.from, route.to, route.distance);
        }
        for route in self.route_tables {
            network.add_route(route.from, route.to, route.distance);
        }
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Route;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = NetworkConfig::default();
        assert!(config.routes.is_empty());
        assert!(config.route_tables.is_empty());
        assert_eq!(config.search.max_iterations, None);
    }

    #[test]
    fn test_parse_config() {
        let config = NetworkConfig::from_toml_str(
            r#"
routes = ["AB5", "BC4"]

[[route]]
from = "Alpha"
to = "Beta"
distance = 12

[search]
max_iterations = 500
"#,
        )
        .unwrap();

        assert_eq!(config.routes, vec!["AB5", "BC4"]);
        assert_eq!(config.route_tables, vec![Route::new("Alpha", "Beta", 12)]);
        assert_eq!(config.search.max_iterations, Some(500));
    }

    #[test]
    fn test_into_network_tables_override_tokens() {
        let config = NetworkConfig {
            routes: vec!["AB5".to_string()],
            route_tables: vec![Route::new("A", "B", 7)],
            search: SearchConfig::default(),
        };
        let network = config.into_network().unwrap();
        assert_eq!(network.distance("A", "B").unwrap(), 7);
    }

    #[test]
    fn test_into_network_rejects_bad_token() {
        let config = NetworkConfig {
            routes: vec!["A5".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.into_network(),
            Err(TrainsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            NetworkConfig::from_toml_str("routes = [1"),
            Err(TrainsError::Toml(_))
        ));
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.toml");

        let config = NetworkConfig {
            routes: vec!["AB5".to_string(), "BC4".to_string()],
            route_tables: vec![Route::new("Paris", "Lyon", 465)],
            search: SearchConfig {
                max_iterations: Some(10),
            },
        };
        config.save(&path).unwrap();

        let loaded = NetworkConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let path = Path::new("/tmp/explicit.toml");
        assert_eq!(
            NetworkConfig::discover(Some(path)),
            Some(path.to_path_buf())
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = NetworkConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read network config"));
    }
}
