//! Shared application state for the web server.
//!
//! The snapshot is generated once at startup and never mutated;
//! handlers re-run the filter engine against it on every request.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use sensyx_common::{DrugSensitivityRecord, ExplorerConfig};
use sensyx_data::{Facets, Generator};

/// Immutable per-session state injected into every Axum handler.
pub struct AppState {
    /// The generated snapshot, in generation order.
    pub snapshot: Vec<DrugSensitivityRecord>,
    /// Distinct filter options over the full snapshot.
    pub facets: Facets,
    pub config: ExplorerConfig,
    pub generated_at: DateTime<Utc>,
}

impl AppState {
    /// Generate the snapshot and derive its facets. Uses the configured
    /// seed when present, entropy otherwise.
    pub fn new(config: ExplorerConfig) -> Self {
        let mut generator = match config.dataset.seed {
            Some(seed) => Generator::from_seed(seed),
            None => Generator::from_entropy(),
        };

        let snapshot = generator.generate(config.dataset.record_count);
        let facets = Facets::collect(&snapshot);

        info!(
            records = snapshot.len(),
            biomarkers = facets.biomarkers.len(),
            tissue_types = facets.tissue_types.len(),
            "snapshot generated"
        );

        Self { snapshot, facets, config, generated_at: Utc::now() }
    }
}

pub type SharedState = Arc<AppState>;
