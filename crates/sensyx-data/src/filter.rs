//! Multi-criteria filter over the snapshot.
//!
//! A record matches when every active criterion holds. Filtering is a
//! pure projection: input order is preserved, the snapshot is never
//! touched, and identical criteria always yield identical results.

use sensyx_common::{DrugSensitivityRecord, FilterCriteria};

/// Does one record satisfy every active criterion?
pub fn matches(record: &DrugSensitivityRecord, criteria: &FilterCriteria) -> bool {
    let term = criteria.search.to_lowercase();

    // Empty term is a substring of everything.
    let matches_search = record.drug_name.to_lowercase().contains(&term)
        || record.cell_line.to_lowercase().contains(&term)
        || record.biomarkers.iter().any(|b| b.to_lowercase().contains(&term));

    let matches_tissue = criteria
        .tissue
        .as_ref()
        .map_or(true, |t| record.tissue_type == *t);

    let matches_dataset = criteria
        .dataset
        .as_ref()
        .map_or(true, |d| record.dataset == *d);

    let matches_drug_class = criteria
        .drug_class
        .as_ref()
        .map_or(true, |c| record.drug_class == *c);

    let matches_biomarker = criteria
        .biomarker
        .as_ref()
        .map_or(true, |bm| record.biomarkers.iter().any(|b| b == bm));

    matches_search && matches_tissue && matches_dataset && matches_drug_class && matches_biomarker
}

/// Filter the snapshot, preserving original order. Returns borrowed
/// rows; the caller applies any display truncation.
pub fn apply<'a>(
    records: &'a [DrugSensitivityRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a DrugSensitivityRecord> {
    records.iter().filter(|r| matches(r, criteria)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(
        id: &str,
        drug: &str,
        cell_line: &str,
        tissue: &str,
        dataset: &str,
        drug_class: &str,
        biomarkers: &[&str],
    ) -> DrugSensitivityRecord {
        DrugSensitivityRecord {
            id: id.to_string(),
            drug_name: drug.to_string(),
            cell_line: cell_line.to_string(),
            sensitivity_score: 0.5,
            biomarkers: biomarkers.iter().map(|s| s.to_string()).collect(),
            tissue_type: tissue.to_string(),
            dataset: dataset.to_string(),
            drug_class: drug_class.to_string(),
            ic50: Some(1.0),
            reference: Some("PMID: 10000000".to_string()),
        }
    }

    fn fixture() -> Vec<DrugSensitivityRecord> {
        vec![
            record("ds-1", "Cisplatin", "A549", "Lung", "CCLE", "Platinum", &["ERCC1"]),
            record("ds-2", "Paclitaxel", "MCF-7", "Breast", "GDSC", "Taxane", &["TUBB3", "ABCB1"]),
        ]
    }

    #[test]
    fn test_unconstrained_returns_all_in_order() {
        let records = fixture();
        let out = apply(&records, &FilterCriteria::default());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "ds-1");
        assert_eq!(out[1].id, "ds-2");
    }

    #[test]
    fn test_idempotent() {
        let records = fixture();
        let criteria = FilterCriteria { search: "a".into(), ..Default::default() };
        let first: Vec<String> = apply(&records, &criteria).iter().map(|r| r.id.clone()).collect();
        let second: Vec<String> = apply(&records, &criteria).iter().map(|r| r.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_biomarker_highlight() {
        let records = fixture();
        let criteria = FilterCriteria { biomarker: Some("TUBB3".into()), ..Default::default() };
        let out = apply(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].drug_name, "Paclitaxel");
    }

    #[test]
    fn test_search_case_insensitive_on_drug_name() {
        let records = fixture();
        let criteria = FilterCriteria { search: "cis".into(), ..Default::default() };
        let out = apply(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].drug_name, "Cisplatin");
    }

    #[test]
    fn test_search_matches_cell_line_and_biomarker() {
        let records = fixture();

        let criteria = FilterCriteria { search: "mcf".into(), ..Default::default() };
        assert_eq!(apply(&records, &criteria).len(), 1);

        let criteria = FilterCriteria { search: "abcb".into(), ..Default::default() };
        let out = apply(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "ds-2");
    }

    #[test]
    fn test_search_no_match_empty_result() {
        let records = fixture();
        let criteria = FilterCriteria { search: "zzz-nonexistent".into(), ..Default::default() };
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn test_categorical_filters_exact_case_sensitive() {
        let records = fixture();

        let criteria = FilterCriteria { tissue: Some("Lung".into()), ..Default::default() };
        assert_eq!(apply(&records, &criteria)[0].id, "ds-1");

        // Exact matching, not case-folded
        let criteria = FilterCriteria { tissue: Some("lung".into()), ..Default::default() };
        assert!(apply(&records, &criteria).is_empty());

        let criteria = FilterCriteria { dataset: Some("GDSC".into()), ..Default::default() };
        assert_eq!(apply(&records, &criteria)[0].id, "ds-2");

        let criteria = FilterCriteria { drug_class: Some("Platinum".into()), ..Default::default() };
        assert_eq!(apply(&records, &criteria)[0].id, "ds-1");
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let records = fixture();
        let criteria = FilterCriteria {
            search: "pac".into(),
            tissue: Some("Lung".into()),
            ..Default::default()
        };
        // Search hits ds-2, tissue hits ds-1; conjunction is empty.
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn test_biomarker_highlight_is_exact_membership() {
        let records = fixture();
        // Substring of a biomarker is not membership.
        let criteria = FilterCriteria { biomarker: Some("TUBB".into()), ..Default::default() };
        assert!(apply(&records, &criteria).is_empty());
    }
}
