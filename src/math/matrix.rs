use crate::error::{ensure_len, NnError, Result};
use crate::math::vector;

/// Dense row-major matrix. Each row of a design matrix is one bias-augmented
/// example.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Builds a matrix from rows, panicking on empty input.
    /// Prefer `from_rows` when the data comes from a caller.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data
        }
    }

    /// Checked constructor: rejects an empty row set and ragged rows.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(row) => row.len(),
            None => return Err(NnError::InvalidParameter("matrix has no rows".into())),
        };
        for row in &data {
            ensure_len("matrix row", cols, row.len())?;
        }
        Ok(Matrix { rows: data.len(), cols, data })
    }

    /// # Panics
    /// Panics if `i >= self.rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    /// Gathers the given rows, in the given order, into a new matrix.
    ///
    /// # Panics
    /// Panics if any index is `>= self.rows`.
    pub fn select_rows(&self, indices: &[usize]) -> Matrix {
        Matrix {
            rows: indices.len(),
            cols: self.cols,
            data: indices.iter().map(|&i| self.data[i].clone()).collect(),
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Matrix-vector product. Result has one entry per row.
    pub fn dot_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        ensure_len("vector vs. matrix columns", self.cols, v.len())?;
        self.data.iter().map(|row| vector::dot(row, v)).collect()
    }

    pub fn ensure_cols(&self, what: &'static str, expected: usize) -> Result<()> {
        ensure_len(what, expected, self.cols)
    }

    pub fn ensure_rows(&self, what: &'static str, expected: usize) -> Result<()> {
        ensure_len(what, expected, self.rows)
    }
}
