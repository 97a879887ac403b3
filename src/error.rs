/// Failure modes of the training pipeline.
///
/// Every fatal condition surfaces as one of these variants so the caller can
/// display a meaningful message; a failed run never returns a partial
/// prediction curve.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("no samples survived cleaning; cannot normalize or train an empty dataset")]
    EmptyDataset,
    #[error("degenerate {axis} bounds: min == max == {value}; normalization would divide by zero")]
    DegenerateBounds { axis: &'static str, value: f64 },
    #[error("inputs and labels differ in length: {inputs} inputs vs {labels} labels")]
    ShapeMismatch { inputs: usize, labels: usize },
    #[error("non-finite normalized {which} value at index {index}")]
    NonFiniteInput { which: &'static str, index: usize },
    #[error("non-finite value produced at epoch {epoch}, batch {batch}; training halted")]
    NonFinite { epoch: usize, batch: usize },
}
