//! Facet extraction: the distinct values each filterable field takes
//! across the FULL snapshot. Filter controls are populated from these,
//! never from the currently filtered subset, so narrowing one filter
//! never hides the options of another.

use serde::Serialize;
use std::collections::HashSet;

use sensyx_common::DrugSensitivityRecord;

/// Distinct values per filterable field, in first-seen snapshot order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Facets {
    pub biomarkers: Vec<String>,
    pub tissue_types: Vec<String>,
    pub datasets: Vec<String>,
    pub drug_classes: Vec<String>,
}

impl Facets {
    pub fn collect(records: &[DrugSensitivityRecord]) -> Self {
        let mut facets = Facets::default();
        let mut seen_bm = HashSet::new();
        let mut seen_tissue = HashSet::new();
        let mut seen_dataset = HashSet::new();
        let mut seen_class = HashSet::new();

        for record in records {
            for bm in &record.biomarkers {
                if seen_bm.insert(bm.clone()) {
                    facets.biomarkers.push(bm.clone());
                }
            }
            if seen_tissue.insert(record.tissue_type.clone()) {
                facets.tissue_types.push(record.tissue_type.clone());
            }
            if seen_dataset.insert(record.dataset.clone()) {
                facets.datasets.push(record.dataset.clone());
            }
            if seen_class.insert(record.drug_class.clone()) {
                facets.drug_classes.push(record.drug_class.clone());
            }
        }

        facets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::Generator;

    #[test]
    fn test_facets_distinct() {
        let snapshot = Generator::from_seed(11).generate(1_000);
        let facets = Facets::collect(&snapshot);

        for list in [
            &facets.biomarkers,
            &facets.tissue_types,
            &facets.datasets,
            &facets.drug_classes,
        ] {
            let unique: HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn test_facets_first_seen_order() {
        let mut snapshot = Generator::from_seed(12).generate(10);
        snapshot[0].dataset = "GDSC".to_string();
        snapshot[1].dataset = "CCLE".to_string();
        snapshot[2].dataset = "GDSC".to_string();
        snapshot[3].dataset = "CellMiner".to_string();
        for r in snapshot.iter_mut().skip(4) {
            r.dataset = "CCLE".to_string();
        }

        let facets = Facets::collect(&snapshot);
        assert_eq!(facets.datasets, vec!["GDSC", "CCLE", "CellMiner"]);
    }

    #[test]
    fn test_facets_empty_snapshot() {
        let facets = Facets::collect(&[]);
        assert!(facets.biomarkers.is_empty());
        assert!(facets.tissue_types.is_empty());
    }

    #[test]
    fn test_large_snapshot_covers_dataset_table() {
        // 1000 draws over 3 datasets will see all of them.
        let snapshot = Generator::from_seed(13).generate(1_000);
        let facets = Facets::collect(&snapshot);
        assert_eq!(facets.datasets.len(), 3);
    }
}
