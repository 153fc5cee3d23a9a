//! Fixed reference tables the generator samples from.
//!
//! These mirror the public pharmacogenomics vocabularies (CCLE / GDSC /
//! CellMiner panels) and never change at runtime; every categorical
//! field of a record is drawn from exactly one of these lists.

pub const DRUGS: &[&str] = &[
    "Paclitaxel", "Cisplatin", "5-Fluorouracil", "Doxorubicin", "Erlotinib",
    "Gemcitabine", "Imatinib", "Oxaliplatin", "Tamoxifen", "Vemurafenib",
    "Irinotecan", "Docetaxel", "Bortezomib", "Sorafenib", "Cetuximab",
    "Pembrolizumab", "Nivolumab", "Olaparib", "Venetoclax", "Rituximab",
];

pub const CELL_LINES: &[&str] = &[
    "MCF-7", "A549", "HT-29", "MDA-MB-231", "PC-9",
    "PANC-1", "K562", "HCT-116", "T47D", "A375",
    "HepG2", "U87", "SKOV3", "DU145", "OVCAR-3",
    "BT-474", "SW480", "LN-229", "SKBR-3", "NCI-H460",
];

pub const TISSUE_TYPES: &[&str] = &[
    "Breast", "Lung", "Colon", "Pancreas", "Leukemia",
    "Melanoma", "Liver", "Brain", "Ovary", "Prostate",
    "Bladder", "Kidney", "Stomach", "Esophagus", "Cervix",
];

pub const DATASETS: &[&str] = &["CCLE", "GDSC", "CellMiner"];

pub const DRUG_CLASSES: &[&str] = &[
    "Taxane", "Platinum", "Antimetabolite", "Anthracycline", "EGFR inhibitor",
    "BRAF inhibitor", "Topoisomerase inhibitor", "Proteasome inhibitor", "SERM", "PARP inhibitor",
    "BCL-2 inhibitor", "Anti-CD20", "PD-1 inhibitor", "VEGF inhibitor", "ALK inhibitor",
];

pub const BIOMARKERS: &[&str] = &[
    "TUBB3", "ABCB1", "ERCC1", "BRCA1", "TYMS",
    "DPYD", "TOP2A", "EGFR", "RRM1", "DCK",
    "BCR-ABL", "GSTP1", "ESR1", "CYP2D6", "BRAF V600E",
    "KRAS", "NRAS", "PIK3CA", "PTEN", "TP53",
    "HER2", "PD-L1", "MSI", "TMB", "ALK",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(DRUGS.len(), 20);
        assert_eq!(CELL_LINES.len(), 20);
        assert_eq!(TISSUE_TYPES.len(), 15);
        assert_eq!(DATASETS.len(), 3);
        assert_eq!(DRUG_CLASSES.len(), 15);
        assert_eq!(BIOMARKERS.len(), 25);
    }

    #[test]
    fn test_no_duplicate_entries() {
        for table in [DRUGS, CELL_LINES, TISSUE_TYPES, DATASETS, DRUG_CLASSES, BIOMARKERS] {
            let unique: HashSet<_> = table.iter().collect();
            assert_eq!(unique.len(), table.len());
        }
    }
}
