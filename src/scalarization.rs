//! Weighted-Tchebycheff scalarization of a normalized front.
//!
//! Cell `(i, j)` of the matrix is `max_n(w[j][n] * |f[i][n]|)`, the
//! Tchebycheff utility of point `i` under weight vector `j` with the ideal
//! point at the origin. Since fronts are normalized first, the origin is the
//! per-objective minimum of the reference front.

use crate::weights::WeightVectors;

/// Dense row-major `points x weight vectors` matrix of Tchebycheff values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarizationMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl ScalarizationMatrix {
    /// Builds the matrix for `normalized` under `weights`, using the first
    /// `n_objectives` coordinates of each point and each weight vector.
    #[must_use]
    pub fn build(normalized: &[Vec<f64>], weights: &WeightVectors, n_objectives: usize) -> Self {
        let rows = normalized.len();
        let cols = weights.len();
        let mut data = Vec::with_capacity(rows * cols);

        for point in normalized {
            for w in weights {
                data.push(tchebycheff(point, w, n_objectives));
            }
        }

        Self { data, rows, cols }
    }

    /// Number of points.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of weight vectors.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value for point `row` under weight vector `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of range");
        self.data[row * self.cols + col]
    }

    /// All values of one point, one per weight vector.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

/// `max_n(weight[n] * |point[n]|)` over the first `n_objectives` components.
#[must_use]
pub fn tchebycheff(point: &[f64], weight: &[f64], n_objectives: usize) -> f64 {
    point
        .iter()
        .zip(weight)
        .take(n_objectives)
        .map(|(&f, &w)| w * f.abs())
        .fold(f64::NEG_INFINITY, f64::max)
}
