//! sensyx-web — Browser-rendered explorer for the drug-sensitivity snapshot
//! Provides:
//!   - Searchable, filterable record table (first 100 matches)
//!   - Facet-driven tissue / dataset / drug-class selectors
//!   - Biomarker highlight toggles
//!   - Quick bio-tools and snapshot statistics panels
//!   - JSON API mirroring the rendered view

pub mod handlers;
pub mod router;
pub mod state;
