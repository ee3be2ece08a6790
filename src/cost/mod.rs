pub mod activation_cost;
pub mod quadratic;
pub mod logarithmic;

pub use activation_cost::{j_derivative, ActivationCost};
pub use quadratic::Quadratic;
pub use logarithmic::Logarithmic;
