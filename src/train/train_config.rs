use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train` run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training data
/// - `batch_size`    — samples per mini-batch; the last batch may be shorter
/// - `learning_rate` — Adam step size
/// - `progress_tx`   — optional channel sender; one `EpochStats` is sent per
///                     completed epoch.  Reporting is best-effort: a dropped
///                     receiver is ignored and training runs to completion.
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel.
    pub fn new(epochs: usize, batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig { epochs, batch_size, learning_rate, progress_tx: None }
    }
}

impl Default for TrainConfig {
    /// 70 epochs of batch-32 Adam, the hyperparameters the pipeline was
    /// tuned with on the cars dataset.
    fn default() -> Self {
        TrainConfig::new(70, 32, 0.1)
    }
}
