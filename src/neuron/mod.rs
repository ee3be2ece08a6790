pub mod neuron;
pub mod gradient;

pub use neuron::Neuron;
pub use gradient::{compute_grad_analytically, compute_grad_numerically};
