//! Weight (utility) vectors for the R2 indicator.
//!
//! Each weight vector defines one scalarizing direction. The R2 value is the
//! average, over all directions, of the best Tchebycheff utility any point of
//! the front achieves along that direction, so the set of vectors fixes what
//! "quality" means for an indicator instance.
//!
//! # Strategies
//!
//! | Constructor | Objectives | Vectors |
//! |---|---|---|
//! | [`WeightVectors::default`] | 2 | 100, evenly spaced |
//! | [`WeightVectors::uniform`] | 2 | `n`, evenly spaced |
//! | [`WeightVectors::generate`] | must be 2 | `n`, evenly spaced |
//! | [`WeightVectors::simplex`] | any | `C(H + m - 1, m - 1)` Das-Dennis points |
//! | [`WeightVectors::from_file`] | any | one per non-blank line |
//! | [`WeightVectors::new`] | any | caller supplied |
//!
//! The evenly spaced 2-objective vector `n` of `N` is `(a, 1 - a)` with
//! `a = n / (N - 1)`.
//!
//! # Example
//!
//! ```
//! use r2_indicator::weights::WeightVectors;
//!
//! let w = WeightVectors::uniform(5).unwrap();
//! assert_eq!(w.len(), 5);
//! assert_eq!(w.as_slice()[1], vec![0.25, 0.75]);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// Number of vectors in the default 2-objective set.
pub const DEFAULT_VECTOR_COUNT: usize = 100;

/// An immutable, non-empty set of equally sized weight vectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWeightVectors"))]
pub struct WeightVectors {
    vectors: Vec<Vec<f64>>,
    n_objectives: usize,
}

/// Wire form of [`WeightVectors`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawWeightVectors {
    vectors: Vec<Vec<f64>>,
    n_objectives: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWeightVectors> for WeightVectors {
    type Error = crate::Error;

    fn try_from(raw: RawWeightVectors) -> Result<Self> {
        let weights = Self::new(raw.vectors)?;
        if weights.n_objectives != raw.n_objectives {
            return Err(ConfigurationError::ObjectiveCountMismatch {
                declared: raw.n_objectives,
                actual: weights.n_objectives,
            }
            .into());
        }
        Ok(weights)
    }
}

impl WeightVectors {
    /// Wraps caller-supplied vectors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyWeightSet`] for an empty set and
    /// [`ConfigurationError::InvalidWeightVector`] if a vector is empty, has a
    /// different length than the first one, or holds a negative or
    /// non-finite component.
    pub fn new(vectors: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = vectors.first() else {
            return Err(ConfigurationError::EmptyWeightSet.into());
        };
        let n_objectives = first.len();

        for (index, v) in vectors.iter().enumerate() {
            let reason = if v.is_empty() {
                Some("vector has no components")
            } else if v.len() != n_objectives {
                Some("length differs from the first vector")
            } else if v.iter().any(|c| !c.is_finite()) {
                Some("component is not finite")
            } else if v.iter().any(|&c| c < 0.0) {
                Some("component is negative")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ConfigurationError::InvalidWeightVector { index, reason }.into());
            }
        }

        Ok(Self {
            vectors,
            n_objectives,
        })
    }

    /// Evenly spaced 2-objective vectors `(a, 1 - a)`, `a = n / (count - 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::TooFewVectors`] when `count < 2`, since
    /// the spacing is undefined for a single vector.
    pub fn uniform(count: usize) -> Result<Self> {
        if count < 2 {
            return Err(ConfigurationError::TooFewVectors { got: count }.into());
        }
        let vectors = evenly_spaced(count);

        trace_debug!(count, "generated uniform weight vectors");
        Ok(Self {
            vectors,
            n_objectives: 2,
        })
    }

    /// Generates `n_vectors` evenly spaced vectors for `n_objectives`.
    ///
    /// Only two objectives have a closed-form spacing; higher dimensions need
    /// [`simplex`](Self::simplex) or a weight file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnsupportedObjectiveCount`] when
    /// `n_objectives != 2`, otherwise the errors of [`uniform`](Self::uniform).
    pub fn generate(n_objectives: usize, n_vectors: usize) -> Result<Self> {
        if n_objectives != 2 {
            return Err(ConfigurationError::UnsupportedObjectiveCount { got: n_objectives }.into());
        }
        Self::uniform(n_vectors)
    }

    /// Das-Dennis points on the unit simplex with `divisions` steps per axis.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidDivisions`] if either argument is zero.
    pub fn simplex(n_objectives: usize, divisions: usize) -> Result<Self> {
        if n_objectives == 0 || divisions == 0 {
            return Err(ConfigurationError::InvalidDivisions.into());
        }
        let mut vectors = Vec::new();
        let mut point = vec![0.0_f64; n_objectives];
        das_dennis_recursive(divisions, 0, divisions, &mut point, &mut vectors);

        trace_debug!(
            n_objectives,
            divisions,
            count = vectors.len(),
            "generated simplex weight vectors"
        );
        Ok(Self {
            vectors,
            n_objectives,
        })
    }

    /// Loads one vector per line from a whitespace-delimited text file,
    /// keeping the first `n_objectives` tokens of every line.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::WeightFile`] if the file cannot be
    /// opened or read, and the errors of [`from_reader`](Self::from_reader)
    /// for malformed content.
    pub fn from_file(path: impl AsRef<Path>, n_objectives: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigurationError::WeightFile {
            path: path.to_path_buf(),
            source,
        })?;

        let weights = Self::from_reader(BufReader::new(file), n_objectives).map_err(|e| {
            match e {
                crate::Error::Configuration(ConfigurationError::WeightFile { source, .. }) => {
                    ConfigurationError::WeightFile {
                        path: path.to_path_buf(),
                        source,
                    }
                    .into()
                }
                other => other,
            }
        })?;

        trace_info!(
            path = %path.display(),
            count = weights.len(),
            n_objectives,
            "loaded weight vectors"
        );
        Ok(weights)
    }

    /// Parses weight vectors from any buffered reader. Blank lines are
    /// skipped and tokens past the `n_objectives`-th are ignored.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MalformedWeightLine`] if a line has fewer than
    ///   `n_objectives` tokens.
    /// - [`ConfigurationError::InvalidWeightValue`] if a token is not a finite,
    ///   non-negative number.
    /// - [`ConfigurationError::EmptyWeightSet`] if no vectors were read.
    /// - [`ConfigurationError::ZeroObjectives`] if `n_objectives` is zero.
    /// - [`ConfigurationError::WeightFile`] if reading fails.
    pub fn from_reader<R: BufRead>(reader: R, n_objectives: usize) -> Result<Self> {
        if n_objectives == 0 {
            return Err(ConfigurationError::ZeroObjectives.into());
        }
        let mut vectors = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ConfigurationError::WeightFile {
                path: std::path::PathBuf::new(),
                source,
            })?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < n_objectives {
                return Err(ConfigurationError::MalformedWeightLine {
                    line: line_no,
                    expected: n_objectives,
                    got: tokens.len(),
                }
                .into());
            }

            let vector = tokens[..n_objectives]
                .iter()
                .map(|tok| {
                    tok.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite() && *v >= 0.0)
                        .ok_or_else(|| ConfigurationError::InvalidWeightValue {
                            line: line_no,
                            token: (*tok).to_string(),
                        })
                })
                .collect::<core::result::Result<Vec<f64>, _>>()?;
            vectors.push(vector);
        }

        if vectors.is_empty() {
            return Err(ConfigurationError::EmptyWeightSet.into());
        }

        Ok(Self {
            vectors,
            n_objectives,
        })
    }

    /// Number of weight vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Always `false`; a constructed set holds at least one vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of components per vector.
    #[must_use]
    pub fn n_objectives(&self) -> usize {
        self.n_objectives
    }

    /// The vectors, in generation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    /// Iterates over the vectors in generation order.
    pub fn iter(&self) -> core::slice::Iter<'_, Vec<f64>> {
        self.vectors.iter()
    }
}

impl Default for WeightVectors {
    /// The 100-vector, 2-objective set.
    fn default() -> Self {
        Self {
            vectors: evenly_spaced(DEFAULT_VECTOR_COUNT),
            n_objectives: 2,
        }
    }
}

impl<'a> IntoIterator for &'a WeightVectors {
    type Item = &'a Vec<f64>;
    type IntoIter = core::slice::Iter<'a, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// `count >= 2` evenly spaced pairs `(a, 1 - a)`.
#[allow(clippy::cast_precision_loss)]
fn evenly_spaced(count: usize) -> Vec<Vec<f64>> {
    let denom = (count - 1) as f64;
    (0..count)
        .map(|n| {
            let a = n as f64 / denom;
            vec![a, 1.0 - a]
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn das_dennis_recursive(
    divisions: usize,
    depth: usize,
    remaining: usize,
    current: &mut Vec<f64>,
    result: &mut Vec<Vec<f64>>,
) {
    if depth == current.len() - 1 {
        current[depth] = remaining as f64 / divisions as f64;
        result.push(current.clone());
        return;
    }

    for i in 0..=remaining {
        current[depth] = i as f64 / divisions as f64;
        das_dennis_recursive(divisions, depth + 1, remaining - i, current, result);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::Error;

    #[test]
    fn test_default_matches_uniform_100() {
        let default = WeightVectors::default();
        let uniform = WeightVectors::uniform(DEFAULT_VECTOR_COUNT).unwrap();
        assert_eq!(default, uniform);
        assert_eq!(default.n_objectives(), 2);
    }

    #[test]
    fn test_uniform_formula_and_sum() {
        let n = 37;
        let w = WeightVectors::uniform(n).unwrap();
        for (i, v) in w.iter().enumerate() {
            let a = i as f64 / (n - 1) as f64;
            assert_eq!(v[0], a);
            assert_eq!(v[1], 1.0 - a);
            assert!((v[0] + v[1] - 1.0).abs() < 1e-12);
        }
        assert_eq!(w.as_slice()[0], vec![0.0, 1.0]);
        assert_eq!(w.as_slice()[n - 1], vec![1.0, 0.0]);
    }

    #[test]
    fn test_uniform_rejects_single_vector() {
        for count in [0, 1] {
            let err = WeightVectors::uniform(count).unwrap_err();
            assert!(matches!(
                err,
                Error::Configuration(ConfigurationError::TooFewVectors { got }) if got == count
            ));
        }
    }

    #[test]
    fn test_generate_only_two_objectives() {
        assert_eq!(WeightVectors::generate(2, 10).unwrap().len(), 10);
        let err = WeightVectors::generate(3, 10).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::UnsupportedObjectiveCount { got: 3 })
        ));
    }

    #[test]
    fn test_simplex_count_and_sum() {
        // C(4 + 3 - 1, 3 - 1) = C(6, 2) = 15
        let w = WeightVectors::simplex(3, 4).unwrap();
        assert_eq!(w.len(), 15);
        assert_eq!(w.n_objectives(), 3);
        for v in &w {
            let sum: f64 = v.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_simplex_invalid() {
        assert!(WeightVectors::simplex(0, 3).is_err());
        assert!(WeightVectors::simplex(3, 0).is_err());
    }

    #[test]
    fn test_from_reader_takes_first_tokens() {
        let data = "0.1 0.9 7.0\n\n0.5 0.5\n";
        let w = WeightVectors::from_reader(Cursor::new(data), 2).unwrap();
        assert_eq!(w.as_slice(), &[vec![0.1, 0.9], vec![0.5, 0.5]]);
    }

    #[test]
    fn test_from_reader_short_line() {
        let data = "0.2 0.3 0.5\n0.4 0.6\n";
        let err = WeightVectors::from_reader(Cursor::new(data), 3).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::MalformedWeightLine {
                line: 2,
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_from_reader_bad_token() {
        let data = "0.2 abc\n";
        let err = WeightVectors::from_reader(Cursor::new(data), 2).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::InvalidWeightValue { line: 1, .. })
        ));
    }

    #[test]
    fn test_from_reader_empty() {
        let err = WeightVectors::from_reader(Cursor::new("\n  \n"), 2).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::EmptyWeightSet)
        ));
    }

    #[test]
    fn test_from_reader_rejects_negative_component() {
        let data = "0.5 0.5\n-1 -1\n";
        let err = WeightVectors::from_reader(Cursor::new(data), 2).unwrap_err();
        match err {
            Error::Configuration(ConfigurationError::InvalidWeightValue { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "-1");
            }
            other => panic!("expected InvalidWeightValue, got: {other}"),
        }
    }

    #[test]
    fn test_from_reader_zero_objectives() {
        let err = WeightVectors::from_reader(Cursor::new("0.5 0.5\n"), 0).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::ZeroObjectives)
        ));
    }

    #[test]
    fn test_new_validates() {
        assert!(WeightVectors::new(vec![]).is_err());
        assert!(WeightVectors::new(vec![vec![0.5, 0.5], vec![1.0]]).is_err());
        assert!(WeightVectors::new(vec![vec![-0.1, 1.1]]).is_err());
        assert!(WeightVectors::new(vec![vec![f64::NAN, 1.0]]).is_err());
        let w = WeightVectors::new(vec![vec![0.2, 0.3, 0.5]]).unwrap();
        assert_eq!(w.n_objectives(), 3);
        assert!(!w.is_empty());
    }
}
