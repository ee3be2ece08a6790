pub mod error;
pub mod math;
pub mod activation;
pub mod cost;
pub mod neuron;
pub mod train;
pub mod perceptron;

// Convenience re-exports
pub use error::{NnError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use cost::{ActivationCost, Logarithmic, Quadratic};
pub use neuron::Neuron;
pub use train::{train_neuron, GdConfig, TrainReport};
pub use perceptron::Perceptron;
