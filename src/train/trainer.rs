use log::debug;

use crate::error::PipelineError;
use crate::model::affine::AffineModel;
use crate::optim::adam::Adam;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `model` in place on normalized inputs/labels for
/// `config.epochs` epochs of mini-batch Adam and returns the per-epoch
/// history.
///
/// Batches are contiguous slices in caller order (the pipeline shuffles
/// once, before training; epochs never re-partition differently), and the
/// last batch may be shorter than `config.batch_size`.
///
/// # Errors
/// Mismatched lengths, an empty dataset, or non-finite normalized values
/// are rejected before the first epoch.  A non-finite loss or parameter
/// after an optimizer step halts training with the offending epoch and
/// batch.
pub fn train(
    model: &mut AffineModel,
    inputs: &[f64],
    labels: &[f64],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>, PipelineError> {
    if inputs.len() != labels.len() {
        return Err(PipelineError::ShapeMismatch {
            inputs: inputs.len(),
            labels: labels.len(),
        });
    }
    if inputs.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }
    check_finite(inputs, "input")?;
    check_finite(labels, "label")?;

    let n = inputs.len();
    let batch_size = config.batch_size.max(1);
    let mut optimizer = Adam::new(config.learning_rate);
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let mut loss_sum = 0.0;
        let mut batches = 0usize;
        let mut squared_error_sum = 0.0;

        for (batch, batch_start) in (0..n).step_by(batch_size).enumerate() {
            let batch_end = (batch_start + batch_size).min(n);
            let xs = &inputs[batch_start..batch_end];
            let ts = &labels[batch_start..batch_end];

            let predictions = model.forward_batch(xs);
            let loss = mean_squared_error(&predictions, ts);

            let grads = model.gradients(xs, ts);
            optimizer.step(model, &grads);

            if !loss.is_finite() || !model.is_finite() {
                return Err(PipelineError::NonFinite { epoch, batch });
            }

            loss_sum += loss;
            squared_error_sum += loss * xs.len() as f64;
            batches += 1;
        }

        let stats = EpochStats {
            epoch,
            loss: loss_sum / batches as f64,
            metric: squared_error_sum / n as f64,
        };
        debug!("epoch {}/{}: loss {:.6}", epoch, config.epochs, stats.loss);

        if let Some(ref tx) = config.progress_tx {
            // Best-effort reporting; a gone receiver is not a cancellation.
            let _ = tx.send(stats);
        }
        history.push(stats);
    }

    Ok(history)
}

/// Scalar MSE over one batch: mean((predicted - expected)²).
fn mean_squared_error(predicted: &[f64], expected: &[f64]) -> f64 {
    let n = predicted.len() as f64;
    predicted
        .iter()
        .zip(expected.iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        / n
}

fn check_finite(values: &[f64], which: &'static str) -> Result<(), PipelineError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PipelineError::NonFiniteInput { which, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    /// Perfectly linear, already-normalized dataset: y = 1 - x.
    fn linear_dataset(n: usize) -> (Vec<f64>, Vec<f64>) {
        let inputs: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        let labels: Vec<f64> = inputs.iter().map(|x| 1.0 - x).collect();
        (inputs, labels)
    }

    #[test]
    fn history_has_one_entry_per_epoch() {
        let (inputs, labels) = linear_dataset(40);
        let mut model = AffineModel::new();

        let history =
            train(&mut model, &inputs, &labels, &TrainConfig::new(12, 8, 0.05)).unwrap();

        assert_eq!(history.len(), 12);
        for (i, stats) in history.iter().enumerate() {
            assert_eq!(stats.epoch, i + 1);
            assert!(stats.loss.is_finite());
            assert!(stats.metric.is_finite());
        }
    }

    #[test]
    fn loss_decreases_on_a_learnable_dataset() {
        let (inputs, labels) = linear_dataset(64);
        let mut model = AffineModel::new();

        let history =
            train(&mut model, &inputs, &labels, &TrainConfig::new(100, 16, 0.05)).unwrap();

        let first: f64 = history[..5].iter().map(|s| s.loss).sum::<f64>() / 5.0;
        let last: f64 = history[history.len() - 5..].iter().map(|s| s.loss).sum::<f64>() / 5.0;
        assert!(
            last < first,
            "mean loss should drop on a noiseless linear dataset: first {first}, last {last}"
        );
        assert!(last < 0.05, "final loss {last} still far from the optimum");
    }

    #[test]
    fn mismatched_lengths_are_rejected_before_training() {
        let mut model = AffineModel::new();

        let err = train(&mut model, &[0.1, 0.2], &[0.3], &TrainConfig::new(5, 2, 0.05))
            .unwrap_err();

        assert!(matches!(err, PipelineError::ShapeMismatch { inputs: 2, labels: 1 }));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let mut model = AffineModel::new();

        let err = train(&mut model, &[], &[], &TrainConfig::new(5, 2, 0.05)).unwrap_err();

        assert!(matches!(err, PipelineError::EmptyDataset));
    }

    #[test]
    fn non_finite_inputs_are_rejected_before_training() {
        let mut model = AffineModel::new();

        let err = train(
            &mut model,
            &[0.1, f64::NAN, 0.3],
            &[0.9, 0.5, 0.1],
            &TrainConfig::new(5, 2, 0.05),
        )
        .unwrap_err();

        assert!(matches!(err, PipelineError::NonFiniteInput { which: "input", index: 1 }));
    }

    #[test]
    fn overflowing_step_halts_with_epoch_and_batch() {
        let (inputs, labels) = linear_dataset(16);
        let mut model = AffineModel::new();

        // An absurd learning rate overflows the parameters within a few
        // steps; the trainer must report where instead of looping on NaN.
        let err = train(&mut model, &inputs, &labels, &TrainConfig::new(10, 4, 1e200))
            .unwrap_err();

        assert!(matches!(err, PipelineError::NonFinite { .. }));
    }

    #[test]
    fn progress_channel_receives_every_epoch() {
        let (inputs, labels) = linear_dataset(20);
        let mut model = AffineModel::new();
        let (tx, rx) = mpsc::channel();
        let config = TrainConfig { progress_tx: Some(tx), ..TrainConfig::new(7, 5, 0.05) };

        let history = train(&mut model, &inputs, &labels, &config).unwrap();
        drop(config);

        let received: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(received.len(), history.len());
        assert_eq!(received.last().unwrap().epoch, 7);
    }

    #[test]
    fn dropped_receiver_does_not_stop_training() {
        let (inputs, labels) = linear_dataset(20);
        let mut model = AffineModel::new();
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let config = TrainConfig { progress_tx: Some(tx), ..TrainConfig::new(6, 5, 0.05) };

        let history = train(&mut model, &inputs, &labels, &config).unwrap();

        assert_eq!(history.len(), 6);
    }
}
