#[path = "../benches/test_fronts.rs"]
mod test_fronts;

use r2_indicator::R2Indicator;
use test_fronts::{dtlz2, linear, shifted, zdt1, zdt2};

#[test]
fn reference_front_beats_shifted_copy() {
    let indicator = R2Indicator::new();
    for reference in [zdt1(50), zdt2(50), linear(50)] {
        let own = indicator.r2(&reference, &reference).unwrap();
        let worse = indicator.r2(&shifted(&reference, 0.1), &reference).unwrap();
        assert!(own < worse, "own = {own}, shifted = {worse}");
    }
}

#[test]
fn denser_front_is_not_worse() {
    // Every point of zdt1(5) is also a point of zdt1(101).
    let indicator = R2Indicator::new();
    let reference = zdt1(200);
    let sparse = indicator.r2(&zdt1(5), &reference).unwrap();
    let dense = indicator.r2(&zdt1(101), &reference).unwrap();
    assert!(dense <= sparse);
}

#[test]
fn convex_front_scores_lower_than_concave() {
    // Normalized to the unit square, the ZDT1 curve bulges toward the
    // origin while ZDT2 bulges away from it.
    let indicator = R2Indicator::new();
    let convex = zdt1(100);
    let concave = zdt2(100);
    let r2_convex = indicator.r2(&convex, &convex).unwrap();
    let r2_concave = indicator.r2(&concave, &concave).unwrap();
    assert!(r2_convex < r2_concave);
}

#[test]
fn extreme_points_are_most_valuable_on_linear_front() {
    let indicator = R2Indicator::new();
    let front = linear(11);
    let best = indicator.best(&front, &front).unwrap();
    assert!(best == 0 || best == 10, "best = {best}");
}

#[test]
fn three_objective_sphere() {
    let indicator = R2Indicator::builder().simplex(3, 10).build().unwrap();
    let front = dtlz2(8);
    let r2 = indicator.r2(&front, &front).unwrap();
    assert!(r2 > 0.0 && r2 < 1.0);

    let eval = indicator.evaluate(&front, &front).unwrap();
    let n = eval.len();
    assert_eq!(eval.n_best(n).unwrap().len(), n);
}
