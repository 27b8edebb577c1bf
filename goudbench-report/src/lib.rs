#![warn(missing_docs)]
//! Goudbench Report Layer
//!
//! Data structures for per-file trial results and the run-level summary,
//! plus the three output surfaces: human-readable terminal text, the JSON
//! results document, and timestamped persistence under `results/`.

mod human;
mod json;
mod persist;
mod report;

pub use human::{format_summary, format_trial};
pub use json::generate_results_json;
pub use persist::{run_stamp, save_results, save_transcript};
pub use report::{RunSummary, TrialRecord};
