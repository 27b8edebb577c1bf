//! JSON Output

use crate::report::TrialRecord;

/// Serialize the trial sequence as the prettified results document: a JSON
/// array of records in trial order.
pub fn generate_results_json(records: &[TrialRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
