//! Ordinary Least Squares
//!
//! Closed-form fit of the line `y = slope * x + intercept` minimising the sum of squared
//! residuals of a point set.

use crate::dataset::{predict, Float, Point, Summary};
use crate::metrics_regression::{metric_set, MetricSet};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A single point together with the value predicted for it
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction<F> {
    pub x: F,
    pub y_actual: F,
    pub y_predicted: F,
}

impl<F: Float> Prediction<F> {
    /// Actual minus predicted value
    pub fn residual(&self) -> F {
        self.y_actual - self.y_predicted
    }
}

/// A fitted least squares line
///
/// For fewer than two points the fit is undefined; it is then represented by the zero line
/// without predictions and without means.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<F> {
    pub slope: F,
    pub intercept: F,
    pub predictions: Vec<Prediction<F>>,
    pub mean_x: Option<F>,
    pub mean_y: Option<F>,
}

impl<F: Float> FitResult<F> {
    fn degenerate() -> Self {
        FitResult {
            slope: F::zero(),
            intercept: F::zero(),
            predictions: Vec::new(),
            mean_x: None,
            mean_y: None,
        }
    }

    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: F) -> F {
        predict(self.slope, self.intercept, x)
    }

    /// Residuals of the fitted points, in input order
    pub fn residuals(&self) -> Vec<F> {
        self.predictions.iter().map(Prediction::residual).collect()
    }

    /// Error metrics of the fitted line on `points`
    pub fn metrics(&self, points: &[Point<F>]) -> MetricSet<F> {
        metric_set(points, self.slope, self.intercept)
    }
}

/// Fit a least squares line through `points`
///
/// * fewer than two points give the zero line with no predictions
/// * if every `x` is equal the slope is `0` and the line runs through the mean of `y`
///
/// ```
/// use regression_lab::{fit, points_from_pairs};
///
/// let points = points_from_pairs(&[(0.0f64, 1.0), (1.0, 3.0), (2.0, 5.0)]);
/// let line = fit(&points);
///
/// assert!((line.slope - 2.0).abs() < 1e-12);
/// assert!((line.intercept - 1.0).abs() < 1e-12);
/// ```
pub fn fit<F: Float>(points: &[Point<F>]) -> FitResult<F> {
    let summary = match Summary::of(points) {
        Some(summary) if summary.n >= 2 => summary,
        _ => return FitResult::degenerate(),
    };

    let slope = if summary.sxx == F::zero() {
        F::zero()
    } else {
        summary.sxy / summary.sxx
    };
    let intercept = summary.mean_y - slope * summary.mean_x;

    let predictions = points
        .iter()
        .map(|p| Prediction {
            x: p.x,
            y_actual: p.y,
            y_predicted: predict(slope, intercept, p.x),
        })
        .collect();

    FitResult {
        slope,
        intercept,
        predictions,
        mean_x: Some(summary.mean_x),
        mean_y: Some(summary.mean_y),
    }
}
