//! Training loop, prediction and accuracy.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::network::NeuralNetwork;
use crate::utils::{argmax, mse};

/// What the progress sink receives after every epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochReport {
    /// Zero-based epoch index.
    pub epoch: usize,
    /// Wall time since `fit` started.
    pub elapsed: Duration,
    pub train_accuracy: f64,
    pub val_accuracy: f64,
    /// Mean per-sample cost over the epoch's training pass.
    pub train_loss: f64,
}

/// Receives one [`EpochReport`] per completed epoch.
pub trait ProgressSink {
    fn on_epoch_end(&mut self, report: &EpochReport);
}

impl<F: FnMut(&EpochReport)> ProgressSink for F {
    fn on_epoch_end(&mut self, report: &EpochReport) {
        (*self)(report)
    }
}

/// Sink that writes one `info` log line per epoch.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_epoch_end(&mut self, report: &EpochReport) {
        log::info!(
            "Epoch: {}, Training Time: {:.2}s, Training Accuracy: {:.2}%, Validation Accuracy: {:.2}%",
            report.epoch + 1,
            report.elapsed.as_secs_f64(),
            report.train_accuracy * 100.0,
            report.val_accuracy * 100.0
        );
    }
}

/// Per-epoch metrics recorded by `fit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub accuracy: Vec<f64>,
    pub val_accuracy: Vec<f64>,
    pub loss: Vec<f64>,
}

impl History {
    pub fn epochs(&self) -> usize {
        self.accuracy.len()
    }
}

impl NeuralNetwork {
    /// Train for the configured number of epochs, logging progress.
    ///
    /// Samples are visited in input order and the weights are updated after
    /// each one. The first error aborts training.
    pub fn fit(
        &mut self,
        x_train: &[Vec<f64>],
        y_train: &[Vec<f64>],
        x_val: &[Vec<f64>],
        y_val: &[Vec<f64>],
    ) -> Result<History> {
        self.fit_with_progress(x_train, y_train, x_val, y_val, &mut LogProgress)
    }

    /// Same as [`NeuralNetwork::fit`], reporting each epoch to `sink`.
    pub fn fit_with_progress(
        &mut self,
        x_train: &[Vec<f64>],
        y_train: &[Vec<f64>],
        x_val: &[Vec<f64>],
        y_val: &[Vec<f64>],
        sink: &mut dyn ProgressSink,
    ) -> Result<History> {
        check_paired(x_train, y_train)?;
        check_paired(x_val, y_val)?;

        let mut history = History::default();
        let start = Instant::now();

        for epoch in 0..self.epochs() {
            let mut total_loss = 0.0;
            for (x, y) in x_train.iter().zip(y_train) {
                let cache = self.forward(x)?;
                total_loss += mse(y, cache.output())?;
                let gradients = self.backward(y, &cache)?;
                self.update(&gradients)?;
            }

            let train_loss = if x_train.is_empty() {
                0.0
            } else {
                total_loss / x_train.len() as f64
            };
            let report = EpochReport {
                epoch,
                elapsed: start.elapsed(),
                train_accuracy: self.compute_accuracy(x_train, y_train)?,
                val_accuracy: self.compute_accuracy(x_val, y_val)?,
                train_loss,
            };
            sink.on_epoch_end(&report);

            history.accuracy.push(report.train_accuracy);
            history.val_accuracy.push(report.val_accuracy);
            history.loss.push(report.train_loss);
        }

        Ok(history)
    }

    /// Index of the most likely class for `x`.
    pub fn predict(&self, x: &[f64]) -> Result<usize> {
        let cache = self.forward(x)?;
        // The output layer is never empty, so argmax always finds an index.
        Ok(argmax(cache.output()).unwrap_or(0))
    }

    /// Fraction of samples whose prediction equals `argmax(y)`.
    ///
    /// An empty dataset has accuracy 0.0.
    pub fn compute_accuracy(&self, xs: &[Vec<f64>], ys: &[Vec<f64>]) -> Result<f64> {
        check_paired(xs, ys)?;
        if xs.is_empty() {
            log::warn!("accuracy requested on an empty dataset");
            return Ok(0.0);
        }

        let mut correct = 0usize;
        for (x, y) in xs.iter().zip(ys) {
            if Some(self.predict(x)?) == argmax(y) {
                correct += 1;
            }
        }
        Ok(correct as f64 / xs.len() as f64)
    }
}

fn check_paired(xs: &[Vec<f64>], ys: &[Vec<f64>]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(NetworkError::DatasetMismatch {
            inputs: xs.len(),
            labels: ys.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;

    fn network(epochs: usize) -> NeuralNetwork {
        let config = NetworkConfig {
            epochs,
            learning_rate: 0.5,
            ..NetworkConfig::new(vec![2, 4, 2])
        };
        NeuralNetwork::new(&config).unwrap()
    }

    #[test]
    fn test_fit_records_every_epoch() {
        let mut nn = network(3);
        let xs = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let ys = vec![vec![1.0, 0.0], vec![0.0, 1.0]];

        let mut seen = Vec::new();
        let mut sink = |report: &EpochReport| seen.push(report.epoch);
        let history = nn
            .fit_with_progress(&xs, &ys, &xs, &ys, &mut sink)
            .unwrap();

        assert_eq!(history.epochs(), 3);
        assert_eq!(history.val_accuracy.len(), 3);
        assert_eq!(history.loss.len(), 3);
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_fit_rejects_unpaired_data() {
        let mut nn = network(1);
        let xs = vec![vec![1.0, 0.0]];
        let result = nn.fit(&xs, &[], &xs, &[vec![1.0, 0.0]]);
        assert!(matches!(
            result,
            Err(NetworkError::DatasetMismatch {
                inputs: 1,
                labels: 0
            })
        ));
    }

    #[test]
    fn test_empty_dataset_accuracy() {
        let nn = network(1);
        assert_eq!(nn.compute_accuracy(&[], &[]).unwrap(), 0.0);
    }
}
