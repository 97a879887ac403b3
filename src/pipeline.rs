use log::info;

use crate::data::clean::{clean, RawRecord, Sample};
use crate::data::shuffle::shuffle;
use crate::error::PipelineError;
use crate::model::affine::AffineModel;
use crate::norm::minmax::{compute_bounds, normalize, Bounds};
use crate::predict::curve::{predict, CurvePoint};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train;

/// Everything a completed run hands to downstream collaborators: the
/// cleaned dataset (for a scatter-plot overlay), the normalization bounds,
/// the trained model, the per-epoch history and the final prediction curve.
#[derive(Debug)]
pub struct PipelineRun {
    pub dataset: Vec<Sample>,
    pub bounds: Bounds,
    pub model: AffineModel,
    pub history: Vec<EpochStats>,
    pub curve: Vec<CurvePoint>,
}

/// Runs the full pipeline on already-deserialized raw records, in strict
/// sequence: clean → shuffle → bounds → normalize → train → predict.
///
/// # Errors
/// Any fatal condition (`EmptyDataset`, `DegenerateBounds`, shape or
/// non-finite failures during training) propagates out unchanged; nothing
/// partial is returned.
pub fn run_pipeline(
    records: &[RawRecord],
    config: &TrainConfig,
) -> Result<PipelineRun, PipelineError> {
    let dataset = clean(records);
    info!("cleaned {} raw records down to {} samples", records.len(), dataset.len());

    // Bounds come from the full cleaned dataset in input order; the
    // shuffled copy only decides training batch membership.
    let bounds = compute_bounds(&dataset)?;

    let mut training_set = dataset.clone();
    shuffle(&mut training_set);
    let tensors = normalize(&training_set, &bounds)?;

    let mut model = AffineModel::new();
    let history = train(&mut model, &tensors.inputs, &tensors.labels, config)?;
    if let Some(last) = history.last() {
        info!("trained {} epochs, final loss {:.6}", history.len(), last.loss);
    }

    let curve = predict(&model, &bounds);

    Ok(PipelineRun { dataset, bounds, model, history, curve })
}
