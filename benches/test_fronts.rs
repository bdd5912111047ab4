//! Analytic Pareto fronts shared by benchmarks and tests.
//!
//! All fronts are for minimization and are sampled evenly along their
//! first objective (or on a simplex lattice for three objectives).

#![allow(dead_code, clippy::cast_precision_loss)]

/// ZDT1 front: `f2 = 1 - sqrt(f1)`, convex.
pub fn zdt1(n: usize) -> Vec<Vec<f64>> {
    spaced(n)
        .map(|f1| vec![f1, 1.0 - f1.sqrt()])
        .collect()
}

/// ZDT2 front: `f2 = 1 - f1^2`, concave.
pub fn zdt2(n: usize) -> Vec<Vec<f64>> {
    spaced(n).map(|f1| vec![f1, 1.0 - f1 * f1]).collect()
}

/// Linear front: `f1 + f2 = 1`.
pub fn linear(n: usize) -> Vec<Vec<f64>> {
    spaced(n).map(|f1| vec![f1, 1.0 - f1]).collect()
}

/// DTLZ2 front: the positive octant of the unit sphere in three objectives,
/// sampled by projecting a simplex lattice with `divisions` steps.
pub fn dtlz2(divisions: usize) -> Vec<Vec<f64>> {
    let mut front = Vec::new();
    for i in 0..=divisions {
        for j in 0..=(divisions - i) {
            let k = divisions - i - j;
            let p = [i as f64, j as f64, k as f64];
            let norm = p.iter().map(|v| v * v).sum::<f64>().sqrt();
            front.push(p.iter().map(|v| v / norm).collect());
        }
    }
    front
}

/// Shifts every coordinate of `front` by `delta`.
pub fn shifted(front: &[Vec<f64>], delta: f64) -> Vec<Vec<f64>> {
    front
        .iter()
        .map(|p| p.iter().map(|v| v + delta).collect())
        .collect()
}

fn spaced(n: usize) -> impl Iterator<Item = f64> {
    let denom = n.saturating_sub(1).max(1) as f64;
    (0..n).map(move |i| i as f64 / denom)
}
