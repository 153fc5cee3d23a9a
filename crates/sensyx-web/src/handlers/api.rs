//! JSON API mirroring the rendered explorer view.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use sensyx_common::error::ApiError;
use sensyx_common::{DrugSensitivityRecord, FilterCriteria};
use sensyx_data::filter;

use crate::handlers::explorer::RecordQuery;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub criteria: FilterCriteria,
    /// Total matches before display truncation.
    pub total: usize,
    /// Number of rows actually returned (≤ display limit).
    pub shown: usize,
    pub records: Vec<DrugSensitivityRecord>,
}

#[derive(Debug, Serialize)]
pub struct SnapshotStats {
    pub total_records: usize,
    pub biomarker_count: usize,
    pub tissue_type_count: usize,
    pub dataset_count: usize,
    pub drug_class_count: usize,
    pub generated_at: DateTime<Utc>,
    pub version: &'static str,
}

/// GET /api/records - Filtered records, truncated to the display limit
pub async fn api_records(
    State(state): State<SharedState>,
    Query(query): Query<RecordQuery>,
) -> impl IntoResponse {
    let criteria = query.into_criteria();
    let matched = filter::apply(&state.snapshot, &criteria);
    let total = matched.len();

    let records: Vec<DrugSensitivityRecord> = matched
        .into_iter()
        .take(state.config.dataset.display_limit)
        .cloned()
        .collect();

    debug!(total, shown = records.len(), "api records query");

    Json(RecordsResponse { shown: records.len(), criteria, total, records })
}

/// GET /api/records/{id} - Single record lookup
pub async fn api_record_detail(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .snapshot
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("No record with id {id}")))?;

    Ok(Json(record.clone()))
}

/// GET /api/facets - Distinct filter options over the full snapshot
pub async fn api_facets(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.facets.clone())
}

/// GET /api/stats - Snapshot summary statistics
pub async fn api_stats(State(state): State<SharedState>) -> impl IntoResponse {
    Json(SnapshotStats {
        total_records: state.snapshot.len(),
        biomarker_count: state.facets.biomarkers.len(),
        tissue_type_count: state.facets.tissue_types.len(),
        dataset_count: state.facets.datasets.len(),
        drug_class_count: state.facets.drug_classes.len(),
        generated_at: state.generated_at,
        version: env!("CARGO_PKG_VERSION"),
    })
}
