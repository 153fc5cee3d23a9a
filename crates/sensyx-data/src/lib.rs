//! sensyx-data — Synthetic snapshot generation and the filter engine.
//!
//! The core of Sensyx: fixed reference tables, a seedable generator that
//! synthesises drug-sensitivity records, and a pure multi-criteria
//! filter over the resulting in-memory snapshot. No I/O, no async.

pub mod facets;
pub mod filter;
pub mod generate;
pub mod reference;

pub use facets::Facets;
pub use filter::{apply, matches};
pub use generate::Generator;
