use serde::{Deserialize, Serialize};

/// Per-epoch training statistics.
///
/// One value is appended to the returned history per completed epoch and,
/// when a `progress_tx` channel is configured in `TrainConfig`, also sent to
/// the receiver so an external reporter can drive a live chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Mean of the per-batch MSE losses in this epoch.
    pub loss: f64,
    /// Sample-weighted mean squared error over the whole epoch.  Differs
    /// from `loss` only when the last batch is short.
    pub metric: f64,
}
