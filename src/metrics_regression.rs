//! Common metrics for regression
//!
//! This module implements error metrics of an arbitrary line `slope * x + intercept` against a
//! point set. The line does not have to come from [`fit`](crate::fit), which allows sweeping
//! the parameter space for cost surfaces and loss curves.
//!
//! Every metric is total: empty point sets yield `0` instead of `NaN`.

use ndarray::Array1;

use crate::dataset::{Float, Point, Summary};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// All four error metrics of a line
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSet<F> {
    pub mse: F,
    pub rmse: F,
    pub mae: F,
    pub r2: F,
}

fn residuals<F: Float>(points: &[Point<F>], slope: F, intercept: F) -> Array1<F> {
    points
        .iter()
        .map(|p| p.residual(slope, intercept))
        .collect()
}

/// Mean squared error between the points and the line
pub fn mean_squared_error<F: Float>(points: &[Point<F>], slope: F, intercept: F) -> F {
    residuals(points, slope, intercept)
        .mapv(|r| r * r)
        .mean()
        .unwrap_or_else(F::zero)
}

/// Square root of the mean squared error
pub fn root_mean_squared_error<F: Float>(points: &[Point<F>], slope: F, intercept: F) -> F {
    mean_squared_error(points, slope, intercept).sqrt()
}

/// Mean absolute error between the points and the line
pub fn mean_absolute_error<F: Float>(points: &[Point<F>], slope: F, intercept: F) -> F {
    residuals(points, slope, intercept)
        .mapv(|r| r.abs())
        .mean()
        .unwrap_or_else(F::zero)
}

/// R squared coefficient, is the proportion of the variance in `y` that is predictable from `x`
///
/// `r2 = 1 - Σ(y_i - ŷ_i)² / Σ(y_i - mean_y)²`
///
/// Defined as `0` for fewer than two points or when every `y` is equal. It is negative for lines
/// which predict worse than the mean.
pub fn r2<F: Float>(points: &[Point<F>], slope: F, intercept: F) -> F {
    let ss_tot = match Summary::of(points) {
        Some(summary) if summary.n >= 2 => summary.syy,
        _ => return F::zero(),
    };
    if ss_tot == F::zero() {
        return F::zero();
    }

    let ss_res = residuals(points, slope, intercept).mapv(|r| r * r).sum();

    F::one() - ss_res / ss_tot
}

/// Compute all metrics of a line at once
pub fn metric_set<F: Float>(points: &[Point<F>], slope: F, intercept: F) -> MetricSet<F> {
    let mse = mean_squared_error(points, slope, intercept);

    MetricSet {
        mse,
        rmse: mse.sqrt(),
        mae: mean_absolute_error(points, slope, intercept),
        r2: r2(points, slope, intercept),
    }
}
