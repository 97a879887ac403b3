pub mod curve;

pub use curve::{predict, CurvePoint, CURVE_POINTS};
