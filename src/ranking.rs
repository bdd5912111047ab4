//! Index ranking over leave-one-out contribution values.
//!
//! A point's contribution is the R2 value of the front without it (see
//! [`Evaluation::contribution_without`]). Removing a valuable point makes
//! the remaining front worse, so a **larger** contribution means a more
//! valuable point.
//!
//! | Operation | Returns |
//! |---|---|
//! | [`Evaluation::best`] | index of the largest contribution |
//! | [`Evaluation::worst`] | index of the smallest contribution |
//! | [`Evaluation::n_best`] | first `n` indices by **ascending** contribution |
//!
//! All helpers resolve ties to the lowest index: [`argmax`] and [`argmin`]
//! keep the first extreme they meet, and [`ascending_order`] is a stable sort.

use crate::error::{Error, Result};
use crate::indicator::Evaluation;

impl Evaluation {
    /// Index of the point whose removal raises R2 the most.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] for fronts with fewer than two points.
    pub fn best(&self) -> Result<usize> {
        let contributions = self.contributions()?;
        argmax(&contributions).ok_or_else(|| Error::insufficient("best point", 2, 0))
    }

    /// Index of the point whose removal raises R2 the least.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] for fronts with fewer than two points.
    pub fn worst(&self) -> Result<usize> {
        let contributions = self.contributions()?;
        argmin(&contributions).ok_or_else(|| Error::insufficient("worst point", 2, 0))
    }

    /// The first `n` indices ordered by ascending contribution, equal
    /// contributions in index order.
    ///
    /// Despite the name this yields the points with the **smallest**
    /// contributions, i.e. the ones [`worst`](Self::worst) would pick first.
    /// Callers that want the most valuable points should take the tail of
    /// [`ascending_order`] over [`contributions`](Self::contributions).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] for fronts with fewer than two
    /// points or when `n` exceeds the front size.
    pub fn n_best(&self, n: usize) -> Result<Vec<usize>> {
        if n > self.len() {
            return Err(Error::insufficient("n-best selection", n, self.len()));
        }
        let contributions = self.contributions()?;
        let mut order = ascending_order(&contributions);
        order.truncate(n);
        Ok(order)
    }
}

/// Index of the largest value, or `None` for an empty slice.
#[must_use]
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the smallest value, or `None` for an empty slice.
#[must_use]
pub fn argmin(values: &[f64]) -> Option<usize> {
    let mut worst: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match worst {
            Some((_, w)) if v >= w => {}
            _ => worst = Some((i, v)),
        }
    }
    worst.map(|(i, _)| i)
}

/// Indices of `values` sorted by ascending value, equal values in index order.
#[must_use]
pub fn ascending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    order
}
