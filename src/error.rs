use thiserror::Error;

/// Errors produced by the neuron and perceptron engines.
///
/// Convergence failure is not an error: training entry points report it as
/// `Ok(false)`.
#[derive(Debug, Error)]
pub enum NnError {
    /// Two operands disagree on a length (weights vs. columns, labels vs. rows).
    #[error("dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A computation would produce NaN/Inf (log of a non-positive value,
    /// non-positive finite-difference step, diverging cost).
    #[error("numeric error: {0}")]
    Numeric(String),

    /// A hyperparameter or input is outside its valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NnError>;

/// Fails with `DimensionMismatch` unless `got == expected`.
pub(crate) fn ensure_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(NnError::DimensionMismatch { what, expected, got });
    }
    Ok(())
}
