//! The R2 indicator and its leave-one-out contributions.
//!
//! [`R2Indicator`] owns an immutable [`WeightVectors`] set chosen at
//! construction. Every evaluation normalizes the approximation front against
//! the reference front's extremes, builds a fresh [`ScalarizationMatrix`]
//! and reduces it:
//!
//! - **R2** ([`aggregate`]): for each weight vector take the minimum
//!   Tchebycheff value over all points, then average over weight vectors.
//!   Lower is better.
//! - **Contribution** ([`contribution_without`]): the same reduction with
//!   one point left out. A large value means the front gets much worse
//!   without that point.
//!
//! The matrix never outlives the call that built it, so one indicator can
//! be shared between threads.
//!
//! # Example
//!
//! ```
//! use r2_indicator::R2Indicator;
//!
//! let indicator = R2Indicator::new();
//! let front = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
//!
//! let r2 = indicator.r2(&front, &front).unwrap();
//! assert!((r2 - 49.0 / 198.0).abs() < 1e-12);
//!
//! let without_first = indicator.contribution_without(&front, &front, 0).unwrap();
//! assert!(without_first > r2);
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::normalize::{Bounds, check_front};
use crate::population::ObjectiveMatrix;
use crate::scalarization::ScalarizationMatrix;
use crate::weights::WeightVectors;

/// R2 quality indicator over a fixed weight-vector set.
#[derive(Debug, Clone, Default)]
pub struct R2Indicator {
    weights: WeightVectors,
}

impl R2Indicator {
    /// Two objectives, 100 evenly spaced weight vectors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Two objectives, `n_vectors` evenly spaced weight vectors.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `n_vectors < 2`.
    pub fn with_vectors(n_vectors: usize) -> Result<Self> {
        Ok(Self::with_weights(WeightVectors::uniform(n_vectors)?))
    }

    /// Loads `n_objectives`-dimensional weight vectors from a text file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is missing, unreadable,
    /// empty, or has a line with fewer than `n_objectives` numbers.
    pub fn from_weights_file(n_objectives: usize, path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_weights(WeightVectors::from_file(
            path,
            n_objectives,
        )?))
    }

    /// Uses an already constructed weight-vector set.
    #[must_use]
    pub fn with_weights(weights: WeightVectors) -> Self {
        trace_info!(
            vectors = weights.len(),
            n_objectives = weights.n_objectives(),
            "created R2 indicator"
        );
        Self { weights }
    }

    /// Creates a builder for selecting the weight strategy.
    #[must_use]
    pub fn builder() -> R2IndicatorBuilder {
        R2IndicatorBuilder::default()
    }

    /// The weight vectors fixed at construction.
    #[must_use]
    pub fn weights(&self) -> &WeightVectors {
        &self.weights
    }

    /// Number of objectives expected in every front.
    #[must_use]
    pub fn n_objectives(&self) -> usize {
        self.weights.n_objectives()
    }

    /// Validates and normalizes both fronts and builds the scalarization
    /// matrix of `approximation`.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] or [`Error::NonFiniteValue`] for a bad row.
    /// - [`Error::InsufficientData`] if `reference` is empty.
    /// - A configuration error if an objective is constant across `reference`.
    pub fn evaluate(
        &self,
        approximation: &[Vec<f64>],
        reference: &[Vec<f64>],
    ) -> Result<Evaluation> {
        let n_objectives = self.n_objectives();
        check_front(approximation, n_objectives)?;
        let bounds = Bounds::from_reference(reference, n_objectives)?;
        let normalized = bounds.normalize(approximation);
        let matrix = ScalarizationMatrix::build(&normalized, &self.weights, n_objectives);

        trace_debug!(
            points = matrix.rows(),
            reference_points = reference.len(),
            vectors = matrix.cols(),
            "built scalarization matrix"
        );
        Ok(Evaluation { matrix })
    }

    /// R2 value of `approximation` against `reference`.
    ///
    /// # Errors
    ///
    /// The errors of [`evaluate`](Self::evaluate), plus
    /// [`Error::InsufficientData`] for an empty approximation front.
    pub fn r2(&self, approximation: &[Vec<f64>], reference: &[Vec<f64>]) -> Result<f64> {
        self.evaluate(approximation, reference)?.r2()
    }

    /// R2 value of `approximation` with point `index` removed.
    ///
    /// # Errors
    ///
    /// The errors of [`evaluate`](Self::evaluate), plus
    /// [`Error::InsufficientData`] if the front has fewer than two points or
    /// `index` is past its end.
    pub fn contribution_without(
        &self,
        approximation: &[Vec<f64>],
        reference: &[Vec<f64>],
        index: usize,
    ) -> Result<f64> {
        self.evaluate(approximation, reference)?
            .contribution_without(index)
    }

    /// Leave-one-out value for every point, in front order.
    ///
    /// # Errors
    ///
    /// Same as [`contribution_without`](Self::contribution_without).
    pub fn contributions(
        &self,
        approximation: &[Vec<f64>],
        reference: &[Vec<f64>],
    ) -> Result<Vec<f64>> {
        self.evaluate(approximation, reference)?.contributions()
    }

    /// Index of the most valuable point (largest leave-one-out value).
    ///
    /// # Errors
    ///
    /// Same as [`contribution_without`](Self::contribution_without).
    pub fn best(&self, approximation: &[Vec<f64>], reference: &[Vec<f64>]) -> Result<usize> {
        self.evaluate(approximation, reference)?.best()
    }

    /// Index of the least valuable point (smallest leave-one-out value).
    ///
    /// # Errors
    ///
    /// Same as [`contribution_without`](Self::contribution_without).
    pub fn worst(&self, approximation: &[Vec<f64>], reference: &[Vec<f64>]) -> Result<usize> {
        self.evaluate(approximation, reference)?.worst()
    }

    /// The `n` indices with the **smallest** leave-one-out values, ascending.
    ///
    /// See [`Evaluation::n_best`] for why the smallest values are returned.
    ///
    /// # Errors
    ///
    /// Same as [`contribution_without`](Self::contribution_without), plus
    /// [`Error::InsufficientData`] if `n` exceeds the front size.
    pub fn n_best(
        &self,
        approximation: &[Vec<f64>],
        reference: &[Vec<f64>],
        n: usize,
    ) -> Result<Vec<usize>> {
        self.evaluate(approximation, reference)?.n_best(n)
    }

    /// R2 value of a population measured against itself.
    ///
    /// # Errors
    ///
    /// Same as [`r2`](Self::r2).
    pub fn r2_of<P: ObjectiveMatrix + ?Sized>(&self, population: &P) -> Result<f64> {
        let front = population.objective_matrix();
        self.r2(&front, &front)
    }

    /// Leave-one-out value of a population measured against itself.
    ///
    /// # Errors
    ///
    /// Same as [`contribution_without`](Self::contribution_without).
    pub fn contribution_without_of<P: ObjectiveMatrix + ?Sized>(
        &self,
        population: &P,
        index: usize,
    ) -> Result<f64> {
        let front = population.objective_matrix();
        self.contribution_without(&front, &front, index)
    }

    /// Most valuable member of a population measured against itself.
    ///
    /// # Errors
    ///
    /// Same as [`best`](Self::best).
    pub fn best_of<P: ObjectiveMatrix + ?Sized>(&self, population: &P) -> Result<usize> {
        let front = population.objective_matrix();
        self.best(&front, &front)
    }

    /// Least valuable member of a population measured against itself.
    ///
    /// # Errors
    ///
    /// Same as [`worst`](Self::worst).
    pub fn worst_of<P: ObjectiveMatrix + ?Sized>(&self, population: &P) -> Result<usize> {
        let front = population.objective_matrix();
        self.worst(&front, &front)
    }

    /// [`n_best`](Self::n_best) of a population measured against itself.
    ///
    /// # Errors
    ///
    /// Same as [`n_best`](Self::n_best).
    pub fn n_best_of<P: ObjectiveMatrix + ?Sized>(
        &self,
        population: &P,
        n: usize,
    ) -> Result<Vec<usize>> {
        let front = population.objective_matrix();
        self.n_best(&front, &front, n)
    }
}

/// Builder for [`R2Indicator`].
///
/// The last strategy set wins. Without any, the default 100-vector
/// 2-objective set is used.
///
/// ```
/// use r2_indicator::R2Indicator;
///
/// let indicator = R2Indicator::builder().simplex(3, 12).build().unwrap();
/// assert_eq!(indicator.n_objectives(), 3);
/// assert_eq!(indicator.weights().len(), 91);
/// ```
#[derive(Debug, Clone, Default)]
pub struct R2IndicatorBuilder {
    source: WeightSource,
}

#[derive(Debug, Clone, Default)]
enum WeightSource {
    #[default]
    Default,
    Uniform(usize),
    Simplex {
        n_objectives: usize,
        divisions: usize,
    },
    File {
        path: PathBuf,
        n_objectives: usize,
    },
    Explicit(Vec<Vec<f64>>),
}

impl R2IndicatorBuilder {
    /// Uses `n` evenly spaced 2-objective vectors.
    #[must_use]
    pub fn vectors(mut self, n: usize) -> Self {
        self.source = WeightSource::Uniform(n);
        self
    }

    /// Uses a Das-Dennis simplex lattice.
    #[must_use]
    pub fn simplex(mut self, n_objectives: usize, divisions: usize) -> Self {
        self.source = WeightSource::Simplex {
            n_objectives,
            divisions,
        };
        self
    }

    /// Loads vectors from a whitespace-delimited text file.
    #[must_use]
    pub fn weights_file(mut self, path: impl Into<PathBuf>, n_objectives: usize) -> Self {
        self.source = WeightSource::File {
            path: path.into(),
            n_objectives,
        };
        self
    }

    /// Uses caller-supplied vectors.
    #[must_use]
    pub fn weights(mut self, vectors: Vec<Vec<f64>>) -> Self {
        self.source = WeightSource::Explicit(vectors);
        self
    }

    /// Builds the indicator, generating or loading the weight set.
    ///
    /// # Errors
    ///
    /// Returns the configuration error of the selected strategy.
    pub fn build(self) -> Result<R2Indicator> {
        let weights = match self.source {
            WeightSource::Default => WeightVectors::default(),
            WeightSource::Uniform(n) => WeightVectors::uniform(n)?,
            WeightSource::Simplex {
                n_objectives,
                divisions,
            } => WeightVectors::simplex(n_objectives, divisions)?,
            WeightSource::File { path, n_objectives } => {
                WeightVectors::from_file(path, n_objectives)?
            }
            WeightSource::Explicit(vectors) => WeightVectors::new(vectors)?,
        };
        Ok(R2Indicator::with_weights(weights))
    }
}

/// The scalarization matrix of one evaluation.
///
/// Returned by [`R2Indicator::evaluate`]. Use it to query several
/// reductions of the same fronts without normalizing again.
#[derive(Debug, Clone)]
pub struct Evaluation {
    matrix: ScalarizationMatrix,
}

impl Evaluation {
    /// The underlying Tchebycheff matrix.
    #[must_use]
    pub fn matrix(&self) -> &ScalarizationMatrix {
        &self.matrix
    }

    /// Number of points in the approximation front.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.rows()
    }

    /// `true` if the approximation front was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.rows() == 0
    }

    /// The R2 value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] for an empty front.
    pub fn r2(&self) -> Result<f64> {
        aggregate(&self.matrix)
    }

    /// The R2 value with point `index` removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] for fronts with fewer than two
    /// points or an out-of-range `index`.
    pub fn contribution_without(&self, index: usize) -> Result<f64> {
        contribution_without(&self.matrix, index)
    }

    /// Leave-one-out value of every point, in front order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] for fronts with fewer than two points.
    pub fn contributions(&self) -> Result<Vec<f64>> {
        (0..self.matrix.rows())
            .map(|i| contribution_without(&self.matrix, i))
            .collect()
    }
}

/// Mean over weight vectors of the smallest value in each column.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] if the matrix has no rows.
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(matrix: &ScalarizationMatrix) -> Result<f64> {
    let rows = matrix.rows();
    if rows == 0 {
        return Err(Error::insufficient("R2 aggregation", 1, 0));
    }

    let mut sum = 0.0;
    for j in 0..matrix.cols() {
        let mut tmp = matrix.get(0, j);
        for i in 1..rows {
            tmp = tmp.min(matrix.get(i, j));
        }
        sum += tmp;
    }
    Ok(sum / matrix.cols() as f64)
}

/// Like [`aggregate`], but skipping row `excluded` in every column.
///
/// Each column scan starts from row 0, or from row 1 when row 0 is the
/// excluded one.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] if the matrix has fewer than two
/// rows or `excluded` is not a row index.
#[allow(clippy::cast_precision_loss)]
pub fn contribution_without(matrix: &ScalarizationMatrix, excluded: usize) -> Result<f64> {
    const OPERATION: &str = "leave-one-out contribution";

    let rows = matrix.rows();
    if rows < 2 {
        return Err(Error::insufficient(OPERATION, 2, rows));
    }
    if excluded >= rows {
        return Err(Error::insufficient(OPERATION, excluded + 1, rows));
    }

    let seed = usize::from(excluded == 0);
    let mut sum = 0.0;
    for j in 0..matrix.cols() {
        let mut tmp = matrix.get(seed, j);
        for i in (0..rows).filter(|&i| i != excluded) {
            tmp = tmp.min(matrix.get(i, j));
        }
        sum += tmp;
    }
    Ok(sum / matrix.cols() as f64)
}
