use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cost::activation_cost::ensure_finite;
use crate::cost::ActivationCost;
use crate::error::{NnError, Result};
use crate::math::{vector, Matrix};
use crate::neuron::Neuron;
use crate::train::gd_config::GdConfig;
use crate::train::train_report::TrainReport;

impl<C: ActivationCost> Neuron<C> {
    /// One gradient step on a batch. Returns `true` when the batch cost moved
    /// by less than `eps`.
    pub fn update_mini_batch(
        &mut self,
        x_batch: &Matrix,
        y_batch: &[f64],
        learning_rate: f64,
        eps: f64,
    ) -> Result<bool> {
        if !learning_rate.is_finite() {
            return Err(NnError::InvalidParameter(format!(
                "learning_rate must be finite, got {learning_rate}"
            )));
        }

        let cost_before = self.cost_function(x_batch, y_batch)?;
        let grad = self.compute_grad_analytically(x_batch, y_batch)?;

        let mut stepped = self.weights().to_vec();
        vector::scaled_sub(&mut stepped, learning_rate, &grad)?;
        ensure_finite("updated weights", &stepped)?;

        // committed only once the new cost evaluates
        let previous = std::mem::replace(self.weights_mut(), stepped);
        let cost_after = match self.cost_function(x_batch, y_batch) {
            Ok(cost) => cost,
            Err(e) => {
                self.set_weights(previous);
                return Err(e);
            }
        };

        Ok((cost_after - cost_before).abs() < eps)
    }

    /// Mini-batch gradient descent.
    ///
    /// Every step draws `batch_size` distinct rows from `rng`, appends the
    /// current full-dataset cost to `costs`, then runs `update_mini_batch`.
    /// Stops at the first converged step (`Ok(true)`); `Ok(false)` means the
    /// step budget ran out.
    ///
    /// `rng` is seeded once by the caller and drawn from across steps.
    pub fn gradient_descent<R: Rng + ?Sized>(
        &mut self,
        x: &Matrix,
        y: &[f64],
        costs: &mut Vec<f64>,
        config: &GdConfig,
        rng: &mut R,
    ) -> Result<bool> {
        config.validate()?;
        x.ensure_rows("design matrix rows vs. labels", y.len())?;
        x.ensure_cols("design matrix columns vs. weights", self.weights().len())?;
        if config.batch_size > x.rows {
            return Err(NnError::InvalidParameter(format!(
                "batch_size {} exceeds the {} available rows",
                config.batch_size, x.rows
            )));
        }

        for step in 0..config.max_steps {
            let indices = rand::seq::index::sample(rng, x.rows, config.batch_size).into_vec();
            let x_batch = x.select_rows(&indices);
            let y_batch: Vec<f64> = indices.iter().map(|&i| y[i]).collect();

            let cost = self.cost_function(x, y)?;
            costs.push(cost);
            debug!("step {step}: cost = {cost:.6}");

            if self.update_mini_batch(&x_batch, &y_batch, config.learning_rate, config.eps)? {
                info!("gradient descent converged after {} steps", step + 1);
                return Ok(true);
            }
        }

        info!(
            "gradient descent did not converge within {} steps",
            config.max_steps
        );
        Ok(false)
    }
}

/// Runs `gradient_descent` with a sampler seeded once from `config.seed`
/// (OS entropy when unset) and collects the trace into a `TrainReport`.
pub fn train_neuron<C: ActivationCost>(
    neuron: &mut Neuron<C>,
    x: &Matrix,
    y: &[f64],
    config: &GdConfig,
) -> Result<TrainReport> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut costs = Vec::new();
    let converged = neuron.gradient_descent(x, y, &mut costs, config, &mut rng)?;
    let final_cost = neuron.cost_function(x, y)?;

    Ok(TrainReport {
        converged,
        steps: costs.len(),
        costs,
        final_cost,
    })
}
