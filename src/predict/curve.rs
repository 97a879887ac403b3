use serde::{Deserialize, Serialize};

use crate::model::affine::AffineModel;
use crate::norm::minmax::{denormalize, Bounds};

/// Number of grid points in a prediction curve.
pub const CURVE_POINTS: usize = 100;

/// One point of the prediction curve, in natural units
/// (horsepower on `x`, predicted MPG on `y`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Evaluates the trained model over an inclusive 100-point linspace of the
/// normalized input range [0, 1] and denormalizes both axes.
///
/// Deterministic for fixed model parameters, so it can be called repeatedly
/// against the same trained model.
pub fn predict(model: &AffineModel, bounds: &Bounds) -> Vec<CurvePoint> {
    (0..CURVE_POINTS)
        .map(|i| {
            let x_norm = i as f64 / (CURVE_POINTS - 1) as f64;
            let y_norm = model.forward(x_norm);
            CurvePoint {
                x: denormalize(x_norm, bounds.input_min, bounds.input_max),
                y: denormalize(y_norm, bounds.label_min, bounds.label_max),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::affine::AffineLayer;

    fn bounds() -> Bounds {
        Bounds { input_min: 46.0, input_max: 230.0, label_min: 9.0, label_max: 46.6 }
    }

    fn identity_model() -> AffineModel {
        AffineModel {
            hidden: AffineLayer { weight: 1.0, bias: 0.0 },
            output: AffineLayer { weight: 1.0, bias: 0.0 },
        }
    }

    #[test]
    fn returns_exactly_one_hundred_points() {
        let curve = predict(&identity_model(), &bounds());
        assert_eq!(curve.len(), CURVE_POINTS);
    }

    #[test]
    fn x_values_span_the_input_range_monotonically() {
        let curve = predict(&identity_model(), &bounds());

        assert_eq!(curve.first().unwrap().x, 46.0);
        assert_eq!(curve.last().unwrap().x, 230.0);
        assert!(curve.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn y_values_are_denormalized_model_outputs() {
        // Identity model: normalized prediction equals the grid value, so
        // the curve is the straight line from label_min to label_max.
        let b = bounds();
        let curve = predict(&identity_model(), &b);

        assert!((curve.first().unwrap().y - b.label_min).abs() < 1e-12);
        assert!((curve.last().unwrap().y - b.label_max).abs() < 1e-9);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let model = AffineModel::new();
        let b = bounds();
        assert_eq!(predict(&model, &b), predict(&model, &b));
    }
}
