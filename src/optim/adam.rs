use crate::model::affine::{AffineModel, ModelGradients};

/// Adam optimizer over the model's four scalar parameters.
///
/// Keeps exponentially decayed running averages of each gradient (first
/// moment) and squared gradient (second moment), bias-corrects both, and
/// steps every parameter by `lr * m̂ / (√v̂ + ε)`.  Decay rates and epsilon
/// are the conventional fixed values; only the learning rate varies.
pub struct Adam {
    pub learning_rate: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    /// Step counter used for bias correction; 0 until the first `step`.
    t: u32,
    /// First moments, indexed as [w1, b1, w2, b2].
    m: [f64; 4],
    /// Second moments, same layout.
    v: [f64; 4],
}

impl Adam {
    pub fn new(learning_rate: f64) -> Adam {
        Adam {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            t: 0,
            m: [0.0; 4],
            v: [0.0; 4],
        }
    }

    /// Applies one Adam update to the model given this batch's gradients.
    /// The bias-corrected moment ratios are packed back into a
    /// `ModelGradients` and applied through the model's own step method.
    pub fn step(&mut self, model: &mut AffineModel, grads: &ModelGradients) {
        self.t += 1;
        let update = ModelGradients {
            w1: self.corrected_ratio(0, grads.w1),
            b1: self.corrected_ratio(1, grads.b1),
            w2: self.corrected_ratio(2, grads.w2),
            b2: self.corrected_ratio(3, grads.b2),
        };
        model.apply_gradients(&update, self.learning_rate);
    }

    /// Updates the running moments for parameter `i` and returns the
    /// bias-corrected ratio m̂ / (√v̂ + ε).
    fn corrected_ratio(&mut self, i: usize, grad: f64) -> f64 {
        self.m[i] = self.beta1 * self.m[i] + (1.0 - self.beta1) * grad;
        self.v[i] = self.beta2 * self.v[i] + (1.0 - self.beta2) * grad * grad;

        let m_hat = self.m[i] / (1.0 - self.beta1.powi(self.t as i32));
        let v_hat = self.v[i] / (1.0 - self.beta2.powi(self.t as i32));

        m_hat / (v_hat.sqrt() + self.epsilon)
    }
}
