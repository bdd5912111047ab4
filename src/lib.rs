#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! R2 quality indicator for multi-objective optimization.
//!
//! R2 scores an *approximation front* against a *reference front*: both are
//! normalized with the reference front's per-objective extremes, every point
//! is scalarized with the weighted Tchebycheff function under a fixed set of
//! weight vectors, and the best (smallest) value per weight vector is
//! averaged. **Lower is better.**
//!
//! Leaving one point out and recomputing gives that point's contribution,
//! which ranks points by how much the front relies on them.
//!
//! # Getting Started
//!
//! ```
//! use r2_indicator::prelude::*;
//!
//! let indicator = R2Indicator::new(); // 2 objectives, 100 weight vectors
//! let reference = vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]];
//! let front = vec![vec![0.1, 0.9], vec![0.6, 0.6], vec![0.9, 0.1]];
//!
//! let r2 = indicator.r2(&front, &reference)?;
//! let best = indicator.best(&front, &reference)?;
//! println!("R2 = {r2:.4}, most valuable point = {best}");
//! # Ok::<(), r2_indicator::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`R2Indicator`] | Fixed weight set; computes R2, contributions and rankings. |
//! | [`WeightVectors`](weights::WeightVectors) | Scalarizing directions: uniform, simplex lattice, or loaded from file. |
//! | [`Bounds`](normalize::Bounds) | Per-objective reference extremes used for normalization. |
//! | [`ScalarizationMatrix`](scalarization::ScalarizationMatrix) | Tchebycheff value of every point under every weight vector. |
//! | [`Evaluation`] | One matrix, queried for R2, contributions, best/worst/n-best. |
//! | [`ObjectiveMatrix`](population::ObjectiveMatrix) | Turns a population into a front. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `cli` | The `r2` binary (clap, tracing-subscriber) | on |
//! | `serde` | `Serialize`/`Deserialize` on weights, bounds and solutions | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) | off (on with `cli`) |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
mod indicator;
pub mod io;
pub mod normalize;
pub mod population;
pub mod ranking;
pub mod scalarization;
pub mod weights;

pub use error::{ConfigurationError, Error, Result};
pub use indicator::{
    Evaluation, R2Indicator, R2IndicatorBuilder, aggregate, contribution_without,
};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use r2_indicator::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ConfigurationError, Error, Result};
    pub use crate::indicator::{Evaluation, R2Indicator, R2IndicatorBuilder};
    pub use crate::io::read_front;
    pub use crate::normalize::Bounds;
    pub use crate::population::{ObjectiveMatrix, Solution};
    pub use crate::scalarization::ScalarizationMatrix;
    pub use crate::weights::WeightVectors;
}
