use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Standard deviation of the parameter initialization distribution.
/// Small enough to start near zero, large enough to break the symmetry
/// between the two layers.
const INIT_STD_DEV: f64 = 0.1;

/// A single 1-in/1-out affine transform `y = weight * x + bias`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineLayer {
    pub weight: f64,
    pub bias: f64,
}

impl AffineLayer {
    pub fn forward(&self, x: f64) -> f64 {
        self.weight * x + self.bias
    }
}

/// Per-parameter gradients (or optimizer-corrected updates) for the four
/// trainable scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelGradients {
    pub w1: f64,
    pub b1: f64,
    pub w2: f64,
    pub b2: f64,
}

/// Two stacked affine layers with no nonlinearity in between:
/// `y = w2 * (w1 * x + b1) + b2`.
///
/// Mathematically collapsible to a single affine map, but kept as two
/// layers to match the trained architecture's parameter count and
/// initialization behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffineModel {
    pub hidden: AffineLayer,
    pub output: AffineLayer,
}

impl AffineModel {
    /// Draws all four parameters independently from N(0, INIT_STD_DEV²).
    pub fn new() -> AffineModel {
        let mut rng = rand::thread_rng();
        let mut draw = || sample_standard_normal(&mut rng) * INIT_STD_DEV;
        AffineModel {
            hidden: AffineLayer { weight: draw(), bias: draw() },
            output: AffineLayer { weight: draw(), bias: draw() },
        }
    }

    pub fn forward(&self, x: f64) -> f64 {
        self.output.forward(self.hidden.forward(x))
    }

    /// Forward pass vectorized over a batch.
    pub fn forward_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.forward(x)).collect()
    }

    /// Gradients of the batch-mean squared error with respect to all four
    /// parameters, via the chain rule through both layers.
    ///
    /// `xs` and `targets` must be the same length; the trainer validates
    /// shapes before batching.
    pub fn gradients(&self, xs: &[f64], targets: &[f64]) -> ModelGradients {
        let n = xs.len() as f64;
        let mut g = ModelGradients::default();

        for (&x, &t) in xs.iter().zip(targets.iter()) {
            let h = self.hidden.forward(x);
            let y = self.output.forward(h);
            // ∂L/∂y for L = mean((y - t)²)
            let dy = 2.0 * (y - t) / n;

            g.w2 += dy * h;
            g.b2 += dy;

            // Propagate through the output layer's weight.
            let dh = dy * self.output.weight;
            g.w1 += dh * x;
            g.b1 += dh;
        }

        g
    }

    /// Applies one descent step scaled by `lr`, mutating all four
    /// parameters in place.
    pub fn apply_gradients(&mut self, grads: &ModelGradients, lr: f64) {
        self.hidden.weight -= lr * grads.w1;
        self.hidden.bias -= lr * grads.b1;
        self.output.weight -= lr * grads.w2;
        self.output.bias -= lr * grads.b2;
    }

    /// True while every parameter is a finite number.  Checked by the
    /// trainer after each optimizer step.
    pub fn is_finite(&self) -> bool {
        self.hidden.weight.is_finite()
            && self.hidden.bias.is_finite()
            && self.output.weight.is_finite()
            && self.output.bias.is_finite()
    }

    /// Serializes the model parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a model from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<AffineModel> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Default for AffineModel {
    fn default() -> Self {
        AffineModel::new()
    }
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
/// Both u1 and u2 must be uniform on (0, 1].
fn sample_standard_normal(rng: &mut ThreadRng) -> f64 {
    // Draw two independent uniform samples in (0, 1] to avoid log(0).
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
