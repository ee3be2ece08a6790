use serde::{Serialize, Deserialize};

use crate::activation::ActivationFunction;
use crate::cost::activation_cost::{check_batch, finite, ActivationCost};
use crate::error::{NnError, Result};

/// Keeps predictions away from 0 and 1 inside `ln`.
///
/// Past the clamp (|z| above roughly 27.6) the cost is flat in `z`, so the
/// numeric gradient of such a row is 0 while the analytic one, built from the
/// unclamped `σ'(z)`, is small but non-zero. Gradient agreement only holds
/// for rows inside the clamp.
const EPS: f64 = 1e-12;

/// Sigmoid activation with the cross-entropy cost
/// `J = -mean(y·ln ŷ + (1 - y)·ln(1 - ŷ))`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Logarithmic;

/// Validates a sigmoid output and clamps it into `[EPS, 1 - EPS]`.
fn clamp_probability(p: f64) -> Result<f64> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(NnError::Numeric(format!(
            "logarithmic cost needs predictions in [0, 1], got {p}"
        )));
    }
    Ok(p.clamp(EPS, 1.0 - EPS))
}

impl ActivationCost for Logarithmic {
    fn activation_function(&self, z: &[f64]) -> Vec<f64> {
        ActivationFunction::Sigmoid.apply(z)
    }

    fn activation_function_derivative(&self, z: &[f64]) -> Vec<f64> {
        ActivationFunction::Sigmoid.apply_derivative(z)
    }

    fn cost(&self, y_hat: &[f64], y: &[f64]) -> Result<f64> {
        check_batch(y_hat, y)?;
        let m = y.len() as f64;
        let mut sum = 0.0;
        for (&p, &t) in y_hat.iter().zip(y) {
            let p = clamp_probability(p)?;
            sum -= t * p.ln() + (1.0 - t) * (1.0 - p).ln();
        }
        finite("logarithmic cost", sum / m)
    }

    /// `dJ/dŷ = (ŷ - y) / (m · ŷ · (1 - ŷ))`; times the sigmoid derivative
    /// this collapses to `(ŷ - y) / m`.
    fn cost_derivative(&self, y: &[f64], y_hat: &[f64]) -> Result<Vec<f64>> {
        check_batch(y_hat, y)?;
        let m = y.len() as f64;
        y_hat
            .iter()
            .zip(y)
            .map(|(&p, &t)| {
                let p = clamp_probability(p)?;
                finite("logarithmic cost derivative", (p - t) / (m * p * (1.0 - p)))
            })
            .collect()
    }
}
