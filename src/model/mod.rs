pub mod affine;

pub use affine::{AffineLayer, AffineModel, ModelGradients};
