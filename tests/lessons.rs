// regression-lab/tests/lessons.rs

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use regression_lab::prelude::*;
use regression_lab_datasets::{generate_dataset_with_rng, DatasetKind};

#[test]
fn perfect_line_is_recovered() {
    let points = points_from_pairs(&[(1f64, 2.), (2., 4.), (3., 6.), (4., 8.)]);
    let line = fit(&points);
    let metrics = metric_set(&points, line.slope, line.intercept);

    assert_abs_diff_eq!(line.slope, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(line.intercept, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(metrics.mse, 0.0, epsilon = 1e-20);
    assert_abs_diff_eq!(metrics.r2, 1.0, epsilon = 1e-12);
}

#[test]
fn uncorrelated_points_explain_little() {
    let points = points_from_pairs(&[(1f64, 5.), (2., 2.), (3., 8.), (4., 3.)]);
    let line = fit(&points);
    let metrics = line.metrics(&points);

    assert!(metrics.r2 < 0.1);
    assert!(metrics.mse > 1.0);
    assert_eq!(metrics.rmse, metrics.mse.sqrt());
}

#[test]
fn cost_surface_cells_match_mse() {
    let points = points_from_pairs(&[(1f64, 5.), (2., 2.), (3., 8.), (4., 3.)]);
    let surface = cost_surface(&points, (-1.0, 3.0), (-2.0, 6.0), 10).unwrap();

    assert_eq!(surface.slopes.dim(), (11, 11));
    assert_eq!(surface.intercepts.dim(), (11, 11));
    assert_eq!(surface.costs.dim(), (11, 11));
    for ((i, j), cost) in surface.costs.indexed_iter() {
        let expected = mean_squared_error(&points, surface.slopes[(i, j)], surface.intercepts[(i, j)]);
        assert_eq!(*cost, expected);
    }
}

#[test]
fn least_squares_is_optimal_against_random_search() {
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let points = generate_dataset_with_rng(DatasetKind::Noisy, 40, &mut rng);
    let line = fit(&points);
    let best = mean_squared_error(&points, line.slope, line.intercept);

    let surface = cost_surface(&points, (-5.0, 5.0), (-10.0, 10.0), 60).unwrap();
    assert!(surface.costs.iter().all(|&cost| best <= cost + 1e-9));
}

#[test]
fn gradient_descent_approaches_least_squares() {
    let mut rng = Xoshiro256Plus::seed_from_u64(5);
    let points = generate_dataset_with_rng(DatasetKind::Linear, 30, &mut rng);
    let line = fit(&points);

    let run = GradientDescentParams::new()
        .learning_rate(0.01)
        .iterations(20_000)
        .run(&points)
        .unwrap();

    assert!(run.converged);
    assert_abs_diff_eq!(run.final_slope, line.slope, epsilon = 1e-3);
    assert_abs_diff_eq!(run.final_intercept, line.intercept, epsilon = 1e-2);

    // the loss of a stable run never increases
    for pair in run.history.windows(2) {
        assert!(pair[1].loss <= pair[0].loss + 1e-12);
    }
}

#[test]
fn divergence_is_reported_not_raised() {
    let mut rng = Xoshiro256Plus::seed_from_u64(9);
    let points = generate_dataset_with_rng(DatasetKind::Linear, 20, &mut rng);

    let run = gradient_descent(&points, 0.5, 500, 0.0, 0.0).unwrap();

    assert!(!run.converged);
    assert!(run.history.len() < 500);
    assert_eq!(format_fixed(run.final_loss().unwrap(), 3), "—");
}

#[test]
fn outliers_of_the_fitted_line() {
    let mut rng = Xoshiro256Plus::seed_from_u64(21);
    let points = generate_dataset_with_rng(DatasetKind::Outliers, 40, &mut rng);
    let line = fit(&points);

    let outliers = detect_outliers(&points, line.slope, line.intercept);
    assert!(outliers.contains(&5));
    assert!(outliers.contains(&15));
    assert!(detect_outliers(&points[..3], line.slope, line.intercept).is_empty());
}

#[test]
fn regularization_lesson_values() {
    assert_abs_diff_eq!(ridge_penalty(5.0, 2.0, 0.1), 5.4, epsilon = 1e-12);
    assert_abs_diff_eq!(lasso_penalty(5.0, 2.0, 0.1), 5.2, epsilon = 1e-12);

    let points = points_from_pairs(&[(1f64, 2.), (2., 4.), (3., 6.), (4., 8.)]);
    let plain = mean_squared_error(&points, 1.5, 0.0);
    assert!(regularized_cost(&points, 1.5, 0.0, Penalty::ridge()) > plain);
    assert!(regularized_cost(&points, 1.5, 0.0, Penalty::lasso()) > plain);
}

#[cfg(feature = "serde")]
#[test]
fn optimization_run_as_json() {
    let points = points_from_pairs(&[(1f64, 2.), (2., 4.), (3., 6.)]);
    let run = gradient_descent(&points, 0.01, 3, 0.0, 0.0).unwrap();

    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["history"].as_array().unwrap().len(), 3);
    assert_eq!(json["history"][0]["epoch"], 1);
    assert!(json["history"][0]["slopeGradient"].is_number());
    assert_eq!(json["converged"], true);

    let back: OptimizationRun<f64> = serde_json::from_value(json).unwrap();
    assert_eq!(back, run);
}
