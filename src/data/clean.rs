use serde::{Deserialize, Serialize};

/// One record as it arrives from the upstream cars dataset.
///
/// Only the two fields the pipeline cares about are projected out; either
/// may be absent or null in the source JSON.  All other fields (name,
/// cylinders, model year, ...) are ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Horsepower", default)]
    pub horsepower: Option<f64>,
    #[serde(rename = "Miles_per_Gallon", default)]
    pub mpg: Option<f64>,
}

/// A cleaned sample.  Both fields are present and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub horsepower: f64,
    pub mpg: f64,
}

/// Projects raw records down to `Sample` and silently drops any record
/// missing either field.  Input order is preserved; an empty result is
/// valid and is rejected later by the normalizer and trainer.
pub fn clean(records: &[RawRecord]) -> Vec<Sample> {
    records
        .iter()
        .filter_map(|r| match (r.horsepower, r.mpg) {
            (Some(horsepower), Some(mpg)) if horsepower.is_finite() && mpg.is_finite() => {
                Some(Sample { horsepower, mpg })
            }
            _ => None,
        })
        .collect()
}
