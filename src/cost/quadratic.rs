use serde::{Serialize, Deserialize};

use crate::activation::ActivationFunction;
use crate::cost::activation_cost::{check_batch, finite, ActivationCost};
use crate::error::Result;

/// Half mean-squared error: `J = 0.5 · mean((ŷ - y)²)`.
///
/// The `0.5` makes `j_derivative` its exact derivative, so the default
/// `cost_derivative` is kept. Works with any activation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quadratic {
    pub activation: ActivationFunction,
}

impl Quadratic {
    pub fn new(activation: ActivationFunction) -> Self {
        Quadratic { activation }
    }
}

impl ActivationCost for Quadratic {
    fn activation_function(&self, z: &[f64]) -> Vec<f64> {
        self.activation.apply(z)
    }

    fn activation_function_derivative(&self, z: &[f64]) -> Vec<f64> {
        self.activation.apply_derivative(z)
    }

    fn cost(&self, y_hat: &[f64], y: &[f64]) -> Result<f64> {
        check_batch(y_hat, y)?;
        let m = y.len() as f64;
        let sum: f64 = y_hat.iter().zip(y).map(|(p, t)| (p - t).powi(2)).sum();
        finite("quadratic cost", 0.5 * sum / m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NnError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn half_mean_squared_error() {
        let q = Quadratic::default();
        assert_abs_diff_eq!(q.cost(&[1.0, 0.0], &[0.0, 0.0]).unwrap(), 0.25);
        assert_abs_diff_eq!(q.cost(&[0.3, 0.7], &[0.3, 0.7]).unwrap(), 0.0);
    }

    #[test]
    fn overflowing_predictions_are_numeric_errors() {
        let q = Quadratic::new(ActivationFunction::Identity);
        assert!(matches!(q.cost(&[f64::MAX], &[-f64::MAX]), Err(NnError::Numeric(_))));
    }
}
