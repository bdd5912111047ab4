//! Per-objective min-max normalization against a reference front.
//!
//! Every coordinate `x` of objective `n` becomes
//! `(x - min[n]) / (max[n] - min[n])`, where the bounds come from the
//! reference front only. Points of the approximation front that lie outside
//! the reference range map outside `[0, 1]`, which is intended: a point that
//! is worse than anything in the reference gets a larger Tchebycheff value.
//!
//! An objective on which every reference point has the same value has no
//! usable range and is rejected with
//! [`ConfigurationError::DegenerateObjective`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Error, Result};

/// Per-objective extremes of a reference front.
///
/// Every objective has finite extremes with `min < max`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBounds"))]
pub struct Bounds {
    min: Vec<f64>,
    max: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBounds {
    min: Vec<f64>,
    max: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBounds> for Bounds {
    type Error = Error;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl Bounds {
    /// Builds bounds from explicit extremes.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::InvalidBounds`] if the lengths differ, no
    ///   objective is given, or an extreme is not finite.
    /// - [`ConfigurationError::DegenerateObjective`] if `max <= min` on any objective.
    pub fn new(min: Vec<f64>, max: Vec<f64>) -> Result<Self> {
        if min.is_empty() || min.len() != max.len() {
            return Err(ConfigurationError::InvalidBounds {
                objective: min.len().min(max.len()),
                reason: "min and max must cover the same, non-zero number of objectives",
            }
            .into());
        }
        for (objective, (lo, hi)) in min.iter().zip(&max).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(ConfigurationError::InvalidBounds {
                    objective,
                    reason: "extreme is not finite",
                }
                .into());
            }
            if hi <= lo {
                return Err(ConfigurationError::DegenerateObjective { objective }.into());
            }
        }
        Ok(Self { min, max })
    }

    /// Computes the bounds of `reference` over its first `n_objectives` columns.
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientData`] if `reference` is empty.
    /// - [`Error::DimensionMismatch`] or [`Error::NonFiniteValue`] for a bad row.
    /// - [`ConfigurationError::DegenerateObjective`] if `max == min` on any objective.
    pub fn from_reference(reference: &[Vec<f64>], n_objectives: usize) -> Result<Self> {
        if reference.is_empty() {
            return Err(Error::insufficient("normalization", 1, 0));
        }
        check_front(reference, n_objectives)?;

        let mut min = vec![f64::INFINITY; n_objectives];
        let mut max = vec![f64::NEG_INFINITY; n_objectives];
        for point in reference {
            for (n, &v) in point.iter().enumerate() {
                min[n] = min[n].min(v);
                max[n] = max[n].max(v);
            }
        }

        Self::new(min, max)
    }

    /// Smallest reference value per objective.
    #[must_use]
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// Largest reference value per objective.
    #[must_use]
    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Number of objectives covered by these bounds.
    #[must_use]
    pub fn n_objectives(&self) -> usize {
        self.min.len()
    }

    /// Rescales one point. Extra coordinates beyond the bounds are dropped.
    #[must_use]
    pub fn normalize_point(&self, point: &[f64]) -> Vec<f64> {
        point
            .iter()
            .zip(self.min.iter().zip(&self.max))
            .map(|(&x, (&lo, &hi))| (x - lo) / (hi - lo))
            .collect()
    }

    /// Rescales every point of `front`.
    #[must_use]
    pub fn normalize(&self, front: &[Vec<f64>]) -> Vec<Vec<f64>> {
        front.iter().map(|p| self.normalize_point(p)).collect()
    }
}

/// Normalizes `front` against the bounds of `reference`.
///
/// # Errors
///
/// Returns the errors of [`Bounds::from_reference`], plus
/// [`Error::DimensionMismatch`] or [`Error::NonFiniteValue`] for a bad row
/// in `front`.
pub fn normalize(
    front: &[Vec<f64>],
    reference: &[Vec<f64>],
    n_objectives: usize,
) -> Result<Vec<Vec<f64>>> {
    check_front(front, n_objectives)?;
    let bounds = Bounds::from_reference(reference, n_objectives)?;
    Ok(bounds.normalize(front))
}

/// Normalizes both the approximation and the reference front against the
/// reference front's bounds.
///
/// # Errors
///
/// Same as [`normalize`].
pub fn normalize_pair(
    approximation: &[Vec<f64>],
    reference: &[Vec<f64>],
    n_objectives: usize,
) -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>)> {
    check_front(approximation, n_objectives)?;
    let bounds = Bounds::from_reference(reference, n_objectives)?;
    Ok((bounds.normalize(approximation), bounds.normalize(reference)))
}

/// Rejects rows with the wrong length or with NaN/infinite coordinates.
pub(crate) fn check_front(front: &[Vec<f64>], n_objectives: usize) -> Result<()> {
    for (row, point) in front.iter().enumerate() {
        if point.len() != n_objectives {
            return Err(Error::DimensionMismatch {
                expected: n_objectives,
                got: point.len(),
                row,
            });
        }
        if let Some(objective) = point.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteValue { row, objective });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_basic() {
        let reference = vec![vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]];
        let bounds = Bounds::from_reference(&reference, 2).unwrap();
        assert_eq!(bounds.min(), &[1.0, 1.0]);
        assert_eq!(bounds.max(), &[5.0, 5.0]);
        assert_eq!(bounds.n_objectives(), 2);
    }

    #[test]
    fn test_self_normalization_spans_unit_interval() {
        let front = vec![
            vec![2.0, 10.0, -1.0],
            vec![4.0, 7.5, 3.0],
            vec![3.0, 5.0, 0.0],
        ];
        let normalized = normalize(&front, &front, 3).unwrap();
        for n in 0..3 {
            let col: Vec<f64> = normalized.iter().map(|p| p[n]).collect();
            let lo = col.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = col.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(lo, 0.0);
            assert_eq!(hi, 1.0);
            assert!(col.iter().all(|v| (0.0..=1.0).contains(v)));
        }
        assert_eq!(normalized[1], vec![1.0, 0.5, 1.0]);
    }

    #[test]
    fn test_outside_reference_range() {
        let reference = vec![vec![0.0, 0.0], vec![2.0, 4.0]];
        let front = vec![vec![4.0, -2.0]];
        let normalized = normalize(&front, &reference, 2).unwrap();
        assert_eq!(normalized[0], vec![2.0, -0.5]);
    }

    #[test]
    fn test_pair_uses_reference_bounds() {
        let reference = vec![vec![0.0, 10.0], vec![10.0, 0.0]];
        let approximation = vec![vec![5.0, 5.0]];
        let (a, r) = normalize_pair(&approximation, &reference, 2).unwrap();
        assert_eq!(a, vec![vec![0.5, 0.5]]);
        assert_eq!(r, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
    }

    #[test]
    fn test_degenerate_objective() {
        let reference = vec![vec![1.0, 2.0], vec![3.0, 2.0]];
        let err = Bounds::from_reference(&reference, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::DegenerateObjective { objective: 1 })
        ));
    }

    #[test]
    fn test_explicit_bounds_validated() {
        let bounds = Bounds::new(vec![0.0, 1.0], vec![2.0, 3.0]).unwrap();
        assert_eq!(bounds.normalize_point(&[1.0, 2.0]), vec![0.5, 0.5]);

        let err = Bounds::new(vec![0.0, 1.0], vec![2.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::DegenerateObjective { objective: 1 })
        ));
        assert!(matches!(
            Bounds::new(vec![0.0], vec![1.0, 2.0]).unwrap_err(),
            Error::Configuration(ConfigurationError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Bounds::new(vec![], vec![]).unwrap_err(),
            Error::Configuration(ConfigurationError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Bounds::new(vec![f64::NEG_INFINITY], vec![0.0]).unwrap_err(),
            Error::Configuration(ConfigurationError::InvalidBounds { objective: 0, .. })
        ));
    }

    #[test]
    fn test_empty_reference() {
        let err = Bounds::from_reference(&[], 2).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                needed: 1,
                got: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_dimension_and_finiteness_checks() {
        let reference = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let err = normalize(&[vec![0.5]], &reference, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                got: 1,
                row: 0
            }
        ));

        let err = normalize(&[vec![0.5, f64::NAN]], &reference, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::NonFiniteValue {
                row: 0,
                objective: 1
            }
        ));
    }
}
