//! Configuration for the viewer, read from the environment.

pub mod dependencies;

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::ViewerError;

pub use dependencies::build_viewer;

// Server configuration
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
pub const DEFAULT_PORT: u16 = 8080;

// Form defaults
pub const DEFAULT_ADDRESS: &str = "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae";
pub const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";
pub const DEFAULT_NEO4J_USER: &str = "neo4j";
pub const DEFAULT_NEO4J_PASSWORD: &str = "password";

/// Values pre-filled into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub address: String,
    pub api_key: String,
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            api_key: String::new(),
            neo4j_uri: DEFAULT_NEO4J_URI.to_string(),
            neo4j_user: DEFAULT_NEO4J_USER.to_string(),
            neo4j_password: DEFAULT_NEO4J_PASSWORD.to_string(),
        }
    }
}

/// Where explorer data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerMode {
    /// Live Etherscan-compatible API.
    Live { api_url: String },
    /// Records loaded from a JSON fixture file.
    Fixture { path: PathBuf },
}

/// Which graph store submitted credentials connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphBackend {
    Neo4j,
    /// Process-local graph; credentials are still required but not checked.
    Memory,
}

impl GraphBackend {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "neo4j".to_string())
            .to_lowercase()
            .as_str()
        {
            "neo4j" => Self::Neo4j,
            "memory" | "in-memory" | "in_memory" => Self::Memory,
            other => {
                warn!("Invalid GRAPH_BACKEND '{}', defaulting to 'neo4j'", other);
                Self::Neo4j
            }
        }
    }
}

/// Full viewer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub bind_addr: SocketAddr,
    pub explorer: ExplorerMode,
    pub graph_backend: GraphBackend,
    pub defaults: FormDefaults,
    pub layout_seed: u64,
    pub json_logs: bool,
}

impl ViewerConfig {
    /// Read configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `VIEWER_HOST`: Bind address (default: 127.0.0.1)
    /// - `VIEWER_PORT`: Bind port (default: 8080)
    /// - `ETHERSCAN_API_URL`: Explorer endpoint (default: https://api.etherscan.io/api)
    /// - `ETHERSCAN_FIXTURE`: JSON fixture path; when set the live API is not used
    /// - `ETHERSCAN_API_KEY`: API key pre-filled into the form (default: empty)
    /// - `GRAPH_BACKEND`: "neo4j" or "memory" (default: neo4j)
    /// - `DEFAULT_ADDRESS`: Address pre-filled into the form
    /// - `NEO4J_URI`, `NEO4J_USER`, `NEO4J_PASSWORD`: Connection details pre-filled into the form
    /// - `LAYOUT_SEED`: Seed for the relationship graph layout (default: 42)
    /// - `LOG_FORMAT`: "json" for structured logs (default: pretty)
    pub fn from_env() -> Result<Self, ViewerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ViewerError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match non_empty("VIEWER_HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| ViewerError::config(format!("VIEWER_HOST '{}': {}", raw, e)))?,
            None => DEFAULT_HOST,
        };
        let port = match non_empty("VIEWER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ViewerError::config(format!("VIEWER_PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };
        let layout_seed = match non_empty("LAYOUT_SEED") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| ViewerError::config(format!("LAYOUT_SEED '{}': {}", raw, e)))?,
            None => tx_charts::DEFAULT_LAYOUT_SEED,
        };

        let explorer = match non_empty("ETHERSCAN_FIXTURE") {
            Some(path) => ExplorerMode::Fixture { path: path.into() },
            None => ExplorerMode::Live {
                api_url: non_empty("ETHERSCAN_API_URL")
                    .unwrap_or_else(|| etherscan::DEFAULT_API_URL.to_string()),
            },
        };

        let fallback = FormDefaults::default();
        let defaults = FormDefaults {
            address: non_empty("DEFAULT_ADDRESS").unwrap_or(fallback.address),
            api_key: non_empty("ETHERSCAN_API_KEY").unwrap_or(fallback.api_key),
            neo4j_uri: non_empty("NEO4J_URI").unwrap_or(fallback.neo4j_uri),
            neo4j_user: non_empty("NEO4J_USER").unwrap_or(fallback.neo4j_user),
            neo4j_password: non_empty("NEO4J_PASSWORD").unwrap_or(fallback.neo4j_password),
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            explorer,
            graph_backend: GraphBackend::parse(non_empty("GRAPH_BACKEND")),
            defaults,
            layout_seed,
            json_logs: non_empty("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        })
    }
}

/// Create CORS layer for localhost development
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(
            config.explorer,
            ExplorerMode::Live {
                api_url: "https://api.etherscan.io/api".to_string()
            }
        );
        assert_eq!(config.graph_backend, GraphBackend::Neo4j);
        assert_eq!(config.defaults, FormDefaults::default());
        assert_eq!(config.defaults.address, DEFAULT_ADDRESS);
        assert_eq!(config.layout_seed, tx_charts::DEFAULT_LAYOUT_SEED);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_overrides() {
        let config = ViewerConfig::from_lookup(lookup(&[
            ("VIEWER_HOST", "0.0.0.0"),
            ("VIEWER_PORT", "9000"),
            ("ETHERSCAN_FIXTURE", "fixtures/txlist.json"),
            ("GRAPH_BACKEND", "Memory"),
            ("NEO4J_URI", "neo4j://db:7687"),
            ("ETHERSCAN_API_KEY", "KEY"),
            ("LAYOUT_SEED", "7"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(
            config.explorer,
            ExplorerMode::Fixture {
                path: PathBuf::from("fixtures/txlist.json")
            }
        );
        assert_eq!(config.graph_backend, GraphBackend::Memory);
        assert_eq!(config.defaults.neo4j_uri, "neo4j://db:7687");
        assert_eq!(config.defaults.neo4j_user, DEFAULT_NEO4J_USER);
        assert_eq!(config.defaults.api_key, "KEY");
        assert_eq!(config.layout_seed, 7);
        assert!(config.json_logs);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config =
            ViewerConfig::from_lookup(lookup(&[("VIEWER_PORT", " "), ("NEO4J_USER", "")])).unwrap();
        assert_eq!(config.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(config.defaults.neo4j_user, DEFAULT_NEO4J_USER);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        for pairs in [
            [("VIEWER_PORT", "eighty")],
            [("VIEWER_HOST", "localhost:1")],
            [("LAYOUT_SEED", "-1")],
        ] {
            match ViewerConfig::from_lookup(lookup(&pairs)) {
                Err(ViewerError::ConfigError(msg)) => assert!(msg.contains(pairs[0].0)),
                other => panic!("Expected ConfigError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unknown_backend_defaults_to_neo4j() {
        let config = ViewerConfig::from_lookup(lookup(&[("GRAPH_BACKEND", "redis")])).unwrap();
        assert_eq!(config.graph_backend, GraphBackend::Neo4j);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        env::set_var("VIEWER_PORT", "18080");
        env::set_var("DEFAULT_ADDRESS", "0xfeed");
        let config = ViewerConfig::from_env();
        env::remove_var("VIEWER_PORT");
        env::remove_var("DEFAULT_ADDRESS");

        let config = config.unwrap();
        assert_eq!(config.bind_addr.port(), 18080);
        assert_eq!(config.defaults.address, "0xfeed");
    }
}
