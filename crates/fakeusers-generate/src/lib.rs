//! Deterministic paginated record generation for fakeusers.
//!
//! Given a region, an expected error rate, a seed string and a page index,
//! this crate produces the same page of records on every call, independent of
//! which other pages were generated before. Pages can be concatenated into a
//! CSV export whose digest is stable across runs.

pub mod corruption;
pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod model;
pub mod output;
pub mod seed;
pub mod synthesizer;

pub use engine::{GenerationEngine, generate_page};
pub use errors::GenerationError;
pub use model::{ExportReport, PageReport};
