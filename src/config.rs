use anyhow::{Context, Result};
use std::env;

// ============================================================================
// Application Configuration
// ============================================================================
//
// Read once at startup from environment variables. Unset variables fall back
// to defaults suitable for a local single-node Scylla; set but unparsable
// values are an error.
//
// ============================================================================

pub const DEFAULT_SCYLLA_NODES: &str = "127.0.0.1:9042";
pub const DEFAULT_KEYSPACE: &str = "recipes_ks";
pub const DEFAULT_REPLICATION_FACTOR: u32 = 1;
pub const DEFAULT_METRICS_PORT: u16 = 9090;
pub const DEFAULT_LOG_FILTER: &str = "info,recipe_service=debug";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub scylla_nodes: Vec<String>,
    pub keyspace: String,
    pub replication_factor: u32,
    pub metrics_port: u16,
    pub log_filter: String,
    pub seed_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scylla_nodes: vec![DEFAULT_SCYLLA_NODES.to_string()],
            keyspace: DEFAULT_KEYSPACE.to_string(),
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            metrics_port: DEFAULT_METRICS_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let scylla_nodes = match lookup("SCYLLA_NODES") {
            Some(raw) => parse_nodes(&raw)?,
            None => defaults.scylla_nodes,
        };

        let keyspace = lookup("SCYLLA_KEYSPACE").unwrap_or(defaults.keyspace);
        if !is_valid_keyspace(&keyspace) {
            anyhow::bail!("Invalid SCYLLA_KEYSPACE value: {}", keyspace);
        }

        let replication_factor = match lookup("SCYLLA_REPLICATION_FACTOR") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("Invalid SCYLLA_REPLICATION_FACTOR value")?,
            None => defaults.replication_factor,
        };

        let metrics_port = match lookup("METRICS_PORT") {
            Some(raw) => raw.trim().parse().context("Invalid METRICS_PORT value")?,
            None => defaults.metrics_port,
        };

        let seed_data = match lookup("RECIPE_SEED_DATA") {
            Some(raw) => raw
                .trim()
                .to_lowercase()
                .parse()
                .context("Invalid RECIPE_SEED_DATA value")?,
            None => defaults.seed_data,
        };

        Ok(Self {
            scylla_nodes,
            keyspace,
            replication_factor,
            metrics_port,
            log_filter: lookup("RECIPE_LOG_FILTER").unwrap_or(defaults.log_filter),
            seed_data,
        })
    }
}

fn parse_nodes(raw: &str) -> Result<Vec<String>> {
    let nodes: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect();

    if nodes.is_empty() {
        anyhow::bail!("Invalid SCYLLA_NODES value: no nodes listed");
    }
    Ok(nodes)
}

// The keyspace name is spliced into CQL, so only plain identifiers pass
fn is_valid_keyspace(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 48
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
