use log::{debug, info};
use rand::Rng;

use crate::error::{ensure_len, Result};
use crate::math::{vector, Matrix};

/// Single-layer threshold classifier over bias-augmented rows, labels 0/1.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    w: Vec<f64>,
}

impl Perceptron {
    pub fn new(weights: Vec<f64>) -> Perceptron {
        Perceptron { w: weights }
    }

    /// `n_features + 1` weights: the bias weight is `1`, the rest uniform in `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(n_features: usize, rng: &mut R) -> Perceptron {
        let mut w = Vec::with_capacity(n_features + 1);
        w.push(1.0);
        w.extend((0..n_features).map(|_| rng.gen::<f64>()));
        Perceptron { w }
    }

    pub fn weights(&self) -> &[f64] {
        &self.w
    }

    pub fn weights_mut(&mut self) -> &mut Vec<f64> {
        &mut self.w
    }

    pub fn set_weights(&mut self, weights: Vec<f64>) {
        self.w = weights;
    }

    /// `1.0` iff `w · row > 0`; ties go to class 0.
    pub fn forward_pass(&self, row: &[f64]) -> Result<f64> {
        ensure_len("example vs. weights", self.w.len(), row.len())?;
        Ok(threshold(vector::dot(&self.w, row)?))
    }

    pub fn vectorized_forward_pass(&self, x: &Matrix) -> Result<Vec<f64>> {
        x.ensure_cols("design matrix columns vs. weights", self.w.len())?;
        Ok(x.dot_vec(&self.w)?.into_iter().map(threshold).collect())
    }

    /// Mistake-driven update: on a wrong prediction `w += (y - ŷ) · row`.
    /// Returns whether the weights changed.
    pub fn train_on_single_example(&mut self, row: &[f64], y: f64) -> Result<bool> {
        let predicted = self.forward_pass(row)?;
        if predicted == y {
            return Ok(false);
        }
        let scale = y - predicted;
        for (w, x) in self.w.iter_mut().zip(row) {
            *w += scale * x;
        }
        Ok(true)
    }

    /// Epoch loop over the rows in order.
    ///
    /// Pushes the error count before the first epoch and after each epoch.
    /// Returns `Ok(true)` as soon as an epoch makes no correction and
    /// `Ok(false)` if `max_steps` epochs all made corrections.
    pub fn train_until_convergence(
        &mut self,
        x: &Matrix,
        y: &[f64],
        errors: &mut Vec<f64>,
        max_steps: usize,
    ) -> Result<bool> {
        x.ensure_rows("design matrix rows vs. labels", y.len())?;
        x.ensure_cols("design matrix columns vs. weights", self.w.len())?;

        errors.push(self.count_errors(x, y)?);

        for epoch in 0..max_steps {
            let mut corrections = 0;
            for (row, &label) in x.data.iter().zip(y) {
                if self.train_on_single_example(row, label)? {
                    corrections += 1;
                }
            }

            let remaining = self.count_errors(x, y)?;
            errors.push(remaining);
            debug!("epoch {epoch}: {corrections} corrections, {remaining} errors");

            if corrections == 0 {
                info!("perceptron converged after {} epochs", epoch + 1);
                return Ok(true);
            }
        }

        info!("perceptron still making mistakes after {max_steps} epochs");
        Ok(false)
    }

    /// Number of misclassified rows, `Σ|ŷ - y|`.
    pub fn count_errors(&self, x: &Matrix, y: &[f64]) -> Result<f64> {
        x.ensure_rows("design matrix rows vs. labels", y.len())?;
        let predicted = self.vectorized_forward_pass(x)?;
        vector::abs_diff_sum(&predicted, y)
    }
}

fn threshold(z: f64) -> f64 {
    if z > 0.0 { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NnError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gate(labels: [f64; 4]) -> (Matrix, Vec<f64>) {
        let x = Matrix::from_data(vec![
            vec![1.0, 0.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
            vec![1.0, 1.0, 1.0],
        ]);
        (x, labels.to_vec())
    }

    #[test]
    fn zero_activation_is_class_zero() {
        let p = Perceptron::new(vec![0.0, 1.0, -1.0]);
        assert_eq!(p.forward_pass(&[1.0, 1.0, 1.0]).unwrap(), 0.0);
        assert_eq!(p.forward_pass(&[1.0, 1.0, 0.5]).unwrap(), 1.0);
    }

    #[test]
    fn correct_prediction_leaves_weights_alone() {
        let mut p = Perceptron::new(vec![-1.0, 0.5, 0.5]);
        assert!(!p.train_on_single_example(&[1.0, 0.0, 0.0], 0.0).unwrap());
        assert_eq!(p.weights(), &[-1.0, 0.5, 0.5]);
    }

    #[test]
    fn mistake_moves_weights_toward_label() {
        let mut p = Perceptron::new(vec![-1.0, 0.5, 0.5]);
        assert!(p.train_on_single_example(&[1.0, 1.0, 1.0], 1.0).unwrap());
        assert_eq!(p.weights(), &[0.0, 1.5, 1.5]);

        assert!(p.train_on_single_example(&[1.0, 1.0, 0.0], 0.0).unwrap());
        assert_eq!(p.weights(), &[-1.0, 0.5, 1.5]);
    }

    #[test]
    fn factory_fixes_bias_to_one() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = Perceptron::random(4, &mut rng);
        assert_eq!(p.weights().len(), 5);
        assert_eq!(p.weights()[0], 1.0);
        assert!(p.weights()[1..].iter().all(|w| (0.0..1.0).contains(w)));
    }

    #[test]
    fn and_gate_converges_from_factory_weights() {
        let (x, y) = gate([0.0, 0.0, 0.0, 1.0]);
        let mut p = Perceptron::random(2, &mut StdRng::seed_from_u64(1));
        let mut errors = Vec::new();
        assert!(p.train_until_convergence(&x, &y, &mut errors, 100).unwrap());
        assert_eq!(*errors.last().unwrap(), 0.0);
        assert_eq!(p.count_errors(&x, &y).unwrap(), 0.0);
    }

    #[test]
    fn already_correct_weights_stop_after_one_epoch() {
        let (x, y) = gate([0.0, 1.0, 1.0, 1.0]);
        let mut p = Perceptron::new(vec![-0.5, 1.0, 1.0]);
        let mut errors = Vec::new();
        assert!(p.train_until_convergence(&x, &y, &mut errors, 10).unwrap());
        assert_eq!(errors, vec![0.0, 0.0]);
    }

    #[test]
    fn label_count_must_match_rows() {
        let (x, _) = gate([0.0; 4]);
        let p = Perceptron::new(vec![0.0; 3]);
        assert!(matches!(
            p.count_errors(&x, &[0.0, 1.0]),
            Err(NnError::DimensionMismatch { expected: 2, got: 4, .. })
        ));
    }
}
