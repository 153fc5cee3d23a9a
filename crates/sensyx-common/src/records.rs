/// Core record types for the drug-sensitivity snapshot.
/// One `DrugSensitivityRecord` is one row of the generated dataset.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Drug sensitivity record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrugSensitivityRecord {
    /// Sequential identifier assigned at generation time, e.g. "ds-42".
    pub id: String,
    pub drug_name: String,
    pub cell_line: String,
    /// Normalised sensitivity in [0.1, 1.0], two decimals.
    pub sensitivity_score: f64,
    /// 1–3 distinct biomarker symbols.
    pub biomarkers: Vec<String>,
    pub tissue_type: String,
    pub dataset: String,
    pub drug_class: String,
    /// IC50 in µM, [0, 10), four decimals. Optional in the schema but
    /// always populated by the generator.
    pub ic50: Option<f64>,
    /// Literature pointer, e.g. "PMID: 31415926". Always populated by
    /// the generator.
    pub reference: Option<String>,
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// The user-controlled filter state for one view of the snapshot.
///
/// `None` on the categorical fields is the "all"/"none" sentinel: no
/// constraint. An empty search string matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Free-text term matched case-insensitively against drug name,
    /// cell line, and biomarkers.
    #[serde(default)]
    pub search: String,
    pub tissue: Option<String>,
    pub dataset: Option<String>,
    pub drug_class: Option<String>,
    /// Highlighted biomarker; matches by exact membership.
    pub biomarker: Option<String>,
}

impl FilterCriteria {
    /// True when every field is at its unconstrained sentinel.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.tissue.is_none()
            && self.dataset.is_none()
            && self.drug_class.is_none()
            && self.biomarker.is_none()
    }
}
