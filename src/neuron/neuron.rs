use crate::cost::ActivationCost;
use crate::error::{ensure_len, Result};
use crate::math::{vector, Matrix};

/// A single unit: a bias-augmented weight vector (`w[0]` is the bias) plus
/// the activation/cost pairing it was built with.
#[derive(Debug, Clone)]
pub struct Neuron<C: ActivationCost> {
    w: Vec<f64>,
    cost: C,
}

impl<C: ActivationCost> Neuron<C> {
    pub fn new(weights: Vec<f64>, cost: C) -> Neuron<C> {
        Neuron { w: weights, cost }
    }

    pub fn weights(&self) -> &[f64] {
        &self.w
    }

    /// Direct access for callers that restore or tweak weights by hand.
    pub fn weights_mut(&mut self) -> &mut Vec<f64> {
        &mut self.w
    }

    pub fn set_weights(&mut self, weights: Vec<f64>) {
        self.w = weights;
    }

    pub fn cost_variant(&self) -> &C {
        &self.cost
    }

    /// `X · w`: one pre-activation per row.
    pub fn summatory(&self, x: &Matrix) -> Result<Vec<f64>> {
        x.ensure_cols("design matrix columns vs. weights", self.w.len())?;
        x.dot_vec(&self.w)
    }

    pub fn activation(&self, z: &[f64]) -> Vec<f64> {
        self.cost.activation_function(z)
    }

    pub fn vectorized_forward_pass(&self, x: &Matrix) -> Result<Vec<f64>> {
        Ok(self.activation(&self.summatory(x)?))
    }

    /// Output for a single bias-augmented example.
    pub fn forward_pass(&self, row: &[f64]) -> Result<f64> {
        ensure_len("example vs. weights", self.w.len(), row.len())?;
        let z = vector::dot(&self.w, row)?;
        Ok(self.activation(&[z])[0])
    }

    /// Cost of the current weights over `(x, y)`.
    pub fn cost_function(&self, x: &Matrix, y: &[f64]) -> Result<f64> {
        x.ensure_rows("design matrix rows vs. labels", y.len())?;
        let y_hat = self.vectorized_forward_pass(x)?;
        self.cost.cost(&y_hat, y)
    }
}
