use crate::error::{ensure_len, NnError, Result};

/// The activation/cost pairing bound to a `Neuron` for its whole lifetime.
///
/// `cost_derivative` is the upstream signal `dJ/dŷ` fed into the chain rule;
/// it must be the true derivative of `cost` for analytic and numeric
/// gradients to agree.
pub trait ActivationCost {
    fn activation_function(&self, z: &[f64]) -> Vec<f64>;

    fn activation_function_derivative(&self, z: &[f64]) -> Vec<f64>;

    /// Scalar cost of predictions `y_hat` against targets `y`.
    fn cost(&self, y_hat: &[f64], y: &[f64]) -> Result<f64>;

    fn cost_derivative(&self, y: &[f64], y_hat: &[f64]) -> Result<Vec<f64>> {
        j_derivative(y, y_hat)
    }
}

/// `(ŷ - y) / m`: derivative of the half mean-squared cost w.r.t. predictions.
pub fn j_derivative(y: &[f64], y_hat: &[f64]) -> Result<Vec<f64>> {
    check_batch(y_hat, y)?;
    let m = y.len() as f64;
    Ok(y_hat.iter().zip(y).map(|(p, t)| (p - t) / m).collect())
}

/// Shared precondition of every cost: equal, non-zero lengths.
pub(crate) fn check_batch(y_hat: &[f64], y: &[f64]) -> Result<()> {
    ensure_len("predictions vs. labels", y.len(), y_hat.len())?;
    if y.is_empty() {
        return Err(NnError::InvalidParameter("empty batch".into()));
    }
    Ok(())
}

pub(crate) fn finite(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NnError::Numeric(format!("{what} is not finite ({value})")))
    }
}

pub(crate) fn ensure_finite(what: &str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(NnError::Numeric(format!(
            "{what}[{i}] is not finite ({})",
            values[i]
        ))),
        None => Ok(()),
    }
}
