use crate::cost::activation_cost::ensure_finite;
use crate::cost::ActivationCost;
use crate::error::{NnError, Result};
use crate::math::{vector, Matrix};
use crate::neuron::neuron::Neuron;

impl<C: ActivationCost> Neuron<C> {
    /// Gradient of the cost w.r.t. the weights by the chain rule:
    /// `Xᵀ · (dJ/dŷ ⊙ dŷ/dz)`.
    pub fn compute_grad_analytically(&self, x: &Matrix, y: &[f64]) -> Result<Vec<f64>> {
        x.ensure_rows("design matrix rows vs. labels", y.len())?;
        let z = self.summatory(x)?;
        let y_hat = self.activation(&z);

        let d_cost = self.cost_variant().cost_derivative(y, &y_hat)?;
        let d_activation = self.cost_variant().activation_function_derivative(&z);
        let chain = vector::hadamard(&d_cost, &d_activation)?;
        ensure_finite("chain-rule signal", &chain)?;

        let grad = x.transpose().dot_vec(&chain)?;
        ensure_finite("analytic gradient", &grad)?;
        Ok(grad)
    }

    /// Central-difference estimate of the gradient, one weight at a time.
    ///
    /// Each perturbed weight is restored from a saved copy, so `w` is
    /// bit-identical on return, also when a cost evaluation fails.
    pub fn compute_grad_numerically(&mut self, x: &Matrix, y: &[f64], eps: f64) -> Result<Vec<f64>> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(NnError::Numeric(format!(
                "finite-difference step must be positive and finite, got {eps}"
            )));
        }
        x.ensure_cols("design matrix columns vs. weights", self.weights().len())?;

        let mut grad = vec![0.0; self.weights().len()];
        for i in 0..grad.len() {
            let old = self.weights()[i];

            self.weights_mut()[i] = old - eps;
            let minus = self.cost_function(x, y);
            self.weights_mut()[i] = old + eps;
            let plus = self.cost_function(x, y);
            self.weights_mut()[i] = old;

            let estimate = (plus? - minus?) / (2.0 * eps);
            if !estimate.is_finite() {
                return Err(NnError::Numeric(format!(
                    "numeric gradient for weight {i} is not finite"
                )));
            }
            grad[i] = estimate;
        }

        Ok(grad)
    }
}

/// Free-function form of [`Neuron::compute_grad_analytically`].
pub fn compute_grad_analytically<C: ActivationCost>(
    neuron: &Neuron<C>,
    x: &Matrix,
    y: &[f64],
) -> Result<Vec<f64>> {
    neuron.compute_grad_analytically(x, y)
}

/// Free-function form of [`Neuron::compute_grad_numerically`].
pub fn compute_grad_numerically<C: ActivationCost>(
    neuron: &mut Neuron<C>,
    x: &Matrix,
    y: &[f64],
    eps: f64,
) -> Result<Vec<f64>> {
    neuron.compute_grad_numerically(x, y, eps)
}
