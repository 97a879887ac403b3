pub mod minmax;

pub use minmax::{compute_bounds, denormalize, normalize, Bounds, NormalizedPair};
