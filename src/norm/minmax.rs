use serde::{Deserialize, Serialize};

use crate::data::clean::Sample;
use crate::error::PipelineError;

/// Min/max extrema of both axes.
///
/// Computed once per run from the full cleaned dataset and immutable
/// afterwards; the predictor reuses the same bounds to map the curve back
/// to natural units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub input_min: f64,
    pub input_max: f64,
    pub label_min: f64,
    pub label_max: f64,
}

/// Normalized training columns, one value per sample, all in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPair {
    pub inputs: Vec<f64>,
    pub labels: Vec<f64>,
}

/// Scans the dataset once, taking componentwise min and max of horsepower
/// and mpg.
pub fn compute_bounds(samples: &[Sample]) -> Result<Bounds, PipelineError> {
    let first = samples.first().ok_or(PipelineError::EmptyDataset)?;
    let mut bounds = Bounds {
        input_min: first.horsepower,
        input_max: first.horsepower,
        label_min: first.mpg,
        label_max: first.mpg,
    };

    for s in &samples[1..] {
        bounds.input_min = bounds.input_min.min(s.horsepower);
        bounds.input_max = bounds.input_max.max(s.horsepower);
        bounds.label_min = bounds.label_min.min(s.mpg);
        bounds.label_max = bounds.label_max.max(s.mpg);
    }

    Ok(bounds)
}

/// Maps every sample to `(v - min) / (max - min)` on both axes.
///
/// # Errors
/// `DegenerateBounds` when either axis has `min == max`; the division is
/// never performed silently.
pub fn normalize(samples: &[Sample], bounds: &Bounds) -> Result<NormalizedPair, PipelineError> {
    if samples.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }
    let input_span = span(bounds.input_min, bounds.input_max, "horsepower")?;
    let label_span = span(bounds.label_min, bounds.label_max, "mpg")?;

    Ok(NormalizedPair {
        inputs: samples.iter().map(|s| (s.horsepower - bounds.input_min) / input_span).collect(),
        labels: samples.iter().map(|s| (s.mpg - bounds.label_min) / label_span).collect(),
    })
}

/// Inverse of the normalization map: `v * (max - min) + min`.
pub fn denormalize(v: f64, min: f64, max: f64) -> f64 {
    v * (max - min) + min
}

fn span(min: f64, max: f64, axis: &'static str) -> Result<f64, PipelineError> {
    if min == max {
        return Err(PipelineError::DegenerateBounds { axis, value: min });
    }
    Ok(max - min)
}
