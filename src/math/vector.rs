//! Slice helpers for the vectors flowing through forward and backward passes.

use crate::error::{ensure_len, Result};

pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure_len("dot operands", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Element-wise (Hadamard) product of two same-length vectors.
pub fn hadamard(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    ensure_len("hadamard operands", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

/// `a -= scale * b`, in place.
pub fn scaled_sub(a: &mut [f64], scale: f64, b: &[f64]) -> Result<()> {
    ensure_len("scaled_sub operands", a.len(), b.len())?;
    for (x, y) in a.iter_mut().zip(b) {
        *x -= scale * y;
    }
    Ok(())
}

/// Sum of absolute element-wise differences.
pub fn abs_diff_sum(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure_len("abs_diff_sum operands", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
}

pub fn l2_norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}
