//! Residual based outlier detection
//!
//! A point is an outlier of a line when its absolute residual lies above the upper Tukey fence
//! `Q3 + 1.5 * IQR` of all absolute residuals. The quartiles use nearest-rank indexing,
//! `sorted[floor(0.25 * n)]` and `sorted[floor(0.75 * n)]`, without interpolation.

use std::collections::BTreeSet;

use crate::dataset::{Float, Point};

/// Minimal number of points for which quartiles are considered meaningful
pub const MIN_POINTS: usize = 4;

/// Fence multiplier applied to the interquartile range
const FENCE: f64 = 1.5;

/// Absolute residual threshold above which a point is an outlier
///
/// Returns `None` for fewer than [`MIN_POINTS`] points.
pub fn outlier_threshold<F: Float>(points: &[Point<F>], slope: F, intercept: F) -> Option<F> {
    if points.len() < MIN_POINTS {
        return None;
    }

    let mut residuals: Vec<F> = points
        .iter()
        .map(|p| p.residual(slope, intercept).abs())
        .collect();
    // NaN residuals sort last
    residuals.sort_by(|a, b| {
        a.partial_cmp(b)
            .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
    });

    let count = residuals.len();
    let q1 = residuals[count / 4];
    let q3 = residuals[count * 3 / 4];

    Some(q3 + F::cast(FENCE) * (q3 - q1))
}

/// Indices of the points whose absolute residual strictly exceeds the outlier threshold
///
/// Indices refer to the original order of `points`. Fewer than four points never have
/// outliers.
/// A point with a `NaN` residual is never reported.
pub fn detect_outliers<F: Float>(points: &[Point<F>], slope: F, intercept: F) -> BTreeSet<usize> {
    let threshold = match outlier_threshold(points, slope, intercept) {
        Some(threshold) => threshold,
        None => return BTreeSet::new(),
    };

    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.residual(slope, intercept).abs() > threshold)
        .map(|(idx, _)| idx)
        .collect()
}
