pub mod data;
pub mod error;
pub mod model;
pub mod norm;
pub mod optim;
pub mod pipeline;
pub mod predict;
pub mod train;

// Convenience re-exports
pub use data::clean::{clean, RawRecord, Sample};
pub use data::shuffle::shuffle;
pub use error::PipelineError;
pub use model::affine::{AffineModel, ModelGradients};
pub use norm::minmax::{compute_bounds, denormalize, normalize, Bounds, NormalizedPair};
pub use optim::adam::Adam;
pub use pipeline::{run_pipeline, PipelineRun};
pub use predict::curve::{predict, CurvePoint};
pub use train::epoch_stats::EpochStats;
pub use train::train_config::TrainConfig;
pub use train::trainer::train;
