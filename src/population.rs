//! Extracting a front from a population of solutions.
//!
//! Optimizers keep solutions in their own types; the indicator only needs
//! the objective vectors in population order. Implement [`ObjectiveMatrix`]
//! for a population type to use it with [`R2Indicator::r2_of`] and the other
//! `*_of` methods, which evaluate the population against itself.
//!
//! [`R2Indicator::r2_of`]: crate::R2Indicator::r2_of

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A source of objective vectors, one row per solution, in population order.
pub trait ObjectiveMatrix {
    /// Copies out the objective vectors.
    fn objective_matrix(&self) -> Vec<Vec<f64>>;
}

/// A solution identified only by its objective values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Objective values, one per objective.
    pub objectives: Vec<f64>,
}

impl Solution {
    /// Creates a solution from its objective values.
    #[must_use]
    pub fn new(objectives: Vec<f64>) -> Self {
        Self { objectives }
    }
}

impl AsRef<[f64]> for Solution {
    fn as_ref(&self) -> &[f64] {
        &self.objectives
    }
}

impl<T: AsRef<[f64]>> ObjectiveMatrix for [T] {
    fn objective_matrix(&self) -> Vec<Vec<f64>> {
        self.iter().map(|s| s.as_ref().to_vec()).collect()
    }
}

impl<T: AsRef<[f64]>> ObjectiveMatrix for Vec<T> {
    fn objective_matrix(&self) -> Vec<Vec<f64>> {
        self.as_slice().objective_matrix()
    }
}
