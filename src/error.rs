//! Error type shared by the chart operations.

/// Failures surfaced by chart operations.
///
/// These are caller contract violations (a variable missing from the
/// statistics, an empty series) or malformed provider payloads. Nothing in
/// the crate retries.
#[derive(Debug, thiserror::Error)]
pub enum FanPlotError {
    #[error("Variable '{0}' is not present in the statistics")]
    UnknownVariable(String),
    #[error("Percentile series for '{0}' is empty")]
    EmptySeries(String),
    #[error("Failed to decode payload: {0}")]
    Json(#[from] serde_json::Error),
}
