//! Explorer configuration.
//!
//! Controls snapshot generation (record count, display cap, optional
//! RNG seed) and the HTTP listener. Loadable from YAML, JSON, or TOML;
//! every field defaults so the server starts with no config file at all.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SensyxError};

/// Complete explorer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Snapshot generation options
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// HTTP listener options
    #[serde(default)]
    pub server: ServerConfig,
}

// ── Dataset ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of records generated at startup
    #[serde(default = "default_record_count")]
    pub record_count: usize,

    /// Maximum rows handed to the rendering surface
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Fixed RNG seed for reproducible snapshots; None = entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_record_count() -> usize { 10_000 }
fn default_display_limit() -> usize { 100 }

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            record_count: default_record_count(),
            display_limit: default_display_limit(),
            seed: None,
        }
    }
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

impl ExplorerConfig {
    /// Load from YAML file
    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load from JSON file
    pub fn from_json(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load from TOML file
    pub fn from_toml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| SensyxError::Config(e.to_string()))
    }

    /// Load from the path in `SENSYX_CONFIG`, dispatching on extension.
    /// Returns defaults when the variable is unset; a set-but-unreadable
    /// or malformed file is an error.
    pub fn load() -> Result<Self> {
        let Ok(path) = std::env::var("SENSYX_CONFIG") else {
            return Ok(Self::default());
        };
        if path.ends_with(".json") {
            Self::from_json(&path)
        } else if path.ends_with(".toml") {
            Self::from_toml(&path)
        } else {
            Self::from_yaml(&path)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
