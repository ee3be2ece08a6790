use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};

/// Hyperparameters for a `Neuron::gradient_descent` run.
///
/// # Fields
/// - `batch_size`    — rows drawn (without replacement) for every step
/// - `learning_rate` — step length along the negative gradient
/// - `eps`           — convergence tolerance on the per-step batch cost change
/// - `max_steps`     — step budget; exhausting it is reported as non-convergence
/// - `seed`          — seeds the batch sampler once per run; `None` uses OS entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GdConfig {
    pub batch_size: usize,
    pub learning_rate: f64,
    pub eps: f64,
    pub max_steps: usize,
    pub seed: Option<u64>,
}

impl Default for GdConfig {
    fn default() -> Self {
        GdConfig {
            batch_size: 10,
            learning_rate: 0.1,
            eps: 1e-6,
            max_steps: 1000,
            seed: None,
        }
    }
}

impl GdConfig {
    pub fn new(batch_size: usize, learning_rate: f64, eps: f64, max_steps: usize) -> Self {
        GdConfig { batch_size, learning_rate, eps, max_steps, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(NnError::InvalidParameter("batch_size must be at least 1".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NnError::InvalidParameter(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(NnError::InvalidParameter(format!(
                "eps must be non-negative and finite, got {}",
                self.eps
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<GdConfig> {
        let config: GdConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_json(path: &str) -> Result<GdConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: GdConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
