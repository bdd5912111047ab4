use std::path::PathBuf;

/// Errors returned by indicator construction, evaluation and the front readers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the weight-vector set or the normalization bounds are
    /// unusable.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Returned when a front is too small for the requested operation.
    #[error("insufficient data for {operation}: need at least {needed} point(s), got {got}")]
    InsufficientData {
        /// The operation that was attempted.
        operation: &'static str,
        /// The minimum number of points the operation needs.
        needed: usize,
        /// The number of points that were supplied.
        got: usize,
    },

    /// Returned when the command line is incomplete or inconsistent.
    #[error("{0}")]
    Argument(String),

    /// Returned when a front row does not have one value per objective.
    #[error("dimension mismatch: expected {expected} objectives but row {row} has {got}")]
    DimensionMismatch {
        /// The number of objectives of the indicator.
        expected: usize,
        /// The actual number of values in the row.
        got: usize,
        /// The index of the offending row.
        row: usize,
    },

    /// Returned when a front contains NaN or an infinite coordinate.
    #[error("non-finite value in row {row}, objective {objective}")]
    NonFiniteValue {
        /// The index of the offending row.
        row: usize,
        /// The objective column holding the value.
        objective: usize,
    },

    /// Returned when a front file cannot be read.
    #[error("failed to read front file {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a front file contains a token that is not a number.
    #[error("invalid number {token:?} on line {line}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },
}

/// Reasons a weight-vector set or normalization bound set is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Returned when the weight-vector file cannot be opened or read.
    #[error("failed to read weight file {}: {source}", path.display())]
    WeightFile {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a weight line has fewer tokens than objectives.
    #[error("weight line {line} has {got} value(s), expected at least {expected}")]
    MalformedWeightLine {
        /// 1-based line number.
        line: usize,
        /// The number of objectives requested.
        expected: usize,
        /// The number of tokens found on the line.
        got: usize,
    },

    /// Returned when a weight token is not a finite number.
    #[error("invalid weight value {token:?} on line {line}")]
    InvalidWeightValue {
        /// 1-based line number.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// Returned when a weight source yields no vectors at all.
    #[error("weight vector set is empty")]
    EmptyWeightSet,

    /// Returned when a uniform set is requested with fewer than two vectors.
    #[error("uniform weight generation needs at least 2 vectors, got {got}")]
    TooFewVectors {
        /// The requested vector count.
        got: usize,
    },

    /// Returned when uniform generation is asked for anything but two objectives.
    #[error(
        "uniform weight generation supports 2 objectives, got {got}; use a simplex lattice or a weight file"
    )]
    UnsupportedObjectiveCount {
        /// The requested number of objectives.
        got: usize,
    },

    /// Returned when an explicitly supplied weight vector is invalid.
    #[error("invalid weight vector {index}: {reason}")]
    InvalidWeightVector {
        /// The index of the vector in the supplied set.
        index: usize,
        /// Why the vector was rejected.
        reason: &'static str,
    },

    /// Returned when a weight source is asked for zero-component vectors.
    #[error("weight vectors need at least one objective")]
    ZeroObjectives,

    /// Returned when a declared objective count disagrees with the vectors' width.
    #[error("weight set declares {declared} objective(s) but its vectors have {actual}")]
    ObjectiveCountMismatch {
        /// The objective count stored with the set.
        declared: usize,
        /// The length of the vectors.
        actual: usize,
    },

    /// Returned when normalization bounds are built from inconsistent extremes.
    #[error("invalid bounds on objective {objective}: {reason}")]
    InvalidBounds {
        /// The offending objective column.
        objective: usize,
        /// Why the bounds were rejected.
        reason: &'static str,
    },

    /// Returned when a simplex lattice is requested with zero objectives or divisions.
    #[error("simplex lattice needs at least one objective and one division")]
    InvalidDivisions,

    /// Returned when every reference point shares the same value on an objective.
    #[error("objective {objective} has identical minimum and maximum in the reference front")]
    DegenerateObjective {
        /// The degenerate objective column.
        objective: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn insufficient(operation: &'static str, needed: usize, got: usize) -> Self {
        Error::InsufficientData {
            operation,
            needed,
            got,
        }
    }
}
