use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Smooth activations usable by a single neuron. All are differentiable
/// everywhere, which the numeric gradient check relies on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    #[default]
    Sigmoid,
    Identity,
    Tanh,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Identity => x,
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Derivative with respect to the pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            ActivationFunction::Identity => 1.0,
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
        }
    }

    pub fn apply(&self, z: &[f64]) -> Vec<f64> {
        z.iter().map(|&x| self.function(x)).collect()
    }

    pub fn apply_derivative(&self, z: &[f64]) -> Vec<f64> {
        z.iter().map(|&x| self.derivative(x)).collect()
    }
}
