//! sensyx-common — Shared types, errors, and configuration used across all Sensyx crates.

pub mod error;
pub mod explorer_config;
pub mod records;

// Re-export commonly used types
pub use explorer_config::{DatasetConfig, ExplorerConfig, ServerConfig};
pub use records::{DrugSensitivityRecord, FilterCriteria};
