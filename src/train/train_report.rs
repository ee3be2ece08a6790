use serde::{Serialize, Deserialize};

/// Outcome of a `train_neuron` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Whether some step changed the batch cost by less than `eps`.
    pub converged: bool,
    /// Number of steps taken (one cost entry per step).
    pub steps: usize,
    /// Full-dataset cost recorded before each step.
    pub costs: Vec<f64>,
    /// Full-dataset cost after the last step.
    pub final_cost: f64,
}
