//! Small filter/scale/normalize pipeline and an averaging helper.

use crate::error::ExerciseError;
use serde::Serialize;
use tracing::debug;

/// Values at or below this are dropped by [`process_data`].
pub const CLEAN_THRESHOLD: f64 = 10.0;
/// Factor applied to every kept value.
pub const SCALE_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessedData {
    /// Values above the threshold, scaled
    pub cleaned: Vec<f64>,
    /// `cleaned` divided by its maximum
    pub normalized: Vec<f64>,
}

/// Keeps values above [`CLEAN_THRESHOLD`], scales them by [`SCALE_FACTOR`] and
/// normalizes against the largest result. No survivors yields two empty lists.
pub fn process_data(raw: &[f64]) -> ProcessedData {
    let cleaned: Vec<f64> = raw
        .iter()
        .filter(|&&value| value > CLEAN_THRESHOLD)
        .map(|value| value * SCALE_FACTOR)
        .collect();

    let normalized = match cleaned.iter().copied().reduce(f64::max) {
        Some(max) => cleaned.iter().map(|value| value / max).collect(),
        None => Vec::new(),
    };
    debug!(input = raw.len(), kept = cleaned.len(), "processed data");

    ProcessedData { cleaned, normalized }
}

/// Arithmetic mean.
///
/// # Errors
///
/// [`ExerciseError::EmptyInput`] when `numbers` is empty.
pub fn calculate_average(numbers: &[f64]) -> Result<f64, ExerciseError> {
    if numbers.is_empty() {
        return Err(ExerciseError::EmptyInput);
    }
    let total: f64 = numbers.iter().sum();
    Ok(total / numbers.len() as f64)
}
