//! Utility functions for randomly generating datasets

use std::convert::Infallible;
use std::str::FromStr;

use ndarray_rand::{
    rand::{thread_rng, Rng},
    rand_distr::{Distribution, Uniform},
};
use regression_lab::Point;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Slope of the underlying trend
pub const TREND_SLOPE: f64 = 2.0;
/// Intercept of the underlying trend
pub const TREND_INTERCEPT: f64 = 1.0;
/// Width of the interval the `x` values are spread over
pub const X_SPAN: f64 = 10.0;
/// Positions which receive a large deviation in [`DatasetKind::Outliers`]
pub const OUTLIER_INDICES: [usize; 2] = [5, 15];
/// Magnitude of the injected deviations
pub const OUTLIER_OFFSET: f64 = 15.0;

const LINEAR_NOISE: f64 = 1.0;
const NOISY_NOISE: f64 = 4.0;
const X_JITTER: f64 = 0.5;
const RANDOM_Y_SPAN: f64 = 20.0;

/// Shape of a synthetic dataset
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Clean trend with a small noise band
    Linear,
    /// The same trend with a wide noise band
    Noisy,
    /// Clean trend with two large deviations
    Outliers,
    /// Uniform scatter without any correlation
    Random,
}

impl Default for DatasetKind {
    fn default() -> Self {
        DatasetKind::Linear
    }
}

/// Unknown names fall back to [`DatasetKind::Linear`]
impl FromStr for DatasetKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "noisy" => DatasetKind::Noisy,
            "outliers" => DatasetKind::Outliers,
            "random" => DatasetKind::Random,
            _ => DatasetKind::Linear,
        })
    }
}

/// Generate `n` points of the given kind using the thread local random number generator
///
/// Consecutive calls return different datasets, use [`generate_dataset_with_rng`] with a
/// seeded generator for reproducible data.
pub fn generate_dataset(kind: DatasetKind, n: usize) -> Vec<Point<f64>> {
    generate_dataset_with_rng(kind, n, &mut thread_rng())
}

/// Generate `n` points of the given kind
///
/// For index `i` the trend datasets place `x` at `10 * i / n` plus a small jitter and `y` on
/// the line `2x + 1` plus uniform noise. The outlier dataset moves the points at indices 5 and
/// 15 (when present) up or down by 15, with a random sign.
pub fn generate_dataset_with_rng(
    kind: DatasetKind,
    n: usize,
    rng: &mut impl Rng,
) -> Vec<Point<f64>> {
    match kind {
        DatasetKind::Linear => make_trend(n, LINEAR_NOISE, rng),
        DatasetKind::Noisy => make_trend(n, NOISY_NOISE, rng),
        DatasetKind::Outliers => {
            let mut points = make_trend(n, LINEAR_NOISE, rng);
            for &idx in OUTLIER_INDICES.iter().filter(|&&idx| idx < n) {
                let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                points[idx].y += sign * OUTLIER_OFFSET;
            }
            points
        }
        DatasetKind::Random => make_scatter(n, rng),
    }
}

fn make_trend(n: usize, noise: f64, rng: &mut impl Rng) -> Vec<Point<f64>> {
    let jitter = Uniform::new(0.0, X_JITTER);
    let noise = Uniform::new_inclusive(-noise, noise);

    (0..n)
        .map(|i| {
            let x = X_SPAN * i as f64 / n as f64 + jitter.sample(rng);
            let y = TREND_SLOPE * x + TREND_INTERCEPT + noise.sample(rng);
            Point::new(x, y)
        })
        .collect()
}

fn make_scatter(n: usize, rng: &mut impl Rng) -> Vec<Point<f64>> {
    let xs = Uniform::new(0.0, X_SPAN);
    let ys = Uniform::new(0.0, RANDOM_Y_SPAN);

    (0..n)
        .map(|_| Point::new(xs.sample(rng), ys.sample(rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray_rand::rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;
    use regression_lab::{detect_outliers, fit};

    #[test]
    fn kind_from_name() {
        assert_eq!("noisy".parse::<DatasetKind>(), Ok(DatasetKind::Noisy));
        assert_eq!("Outliers".parse::<DatasetKind>(), Ok(DatasetKind::Outliers));
        assert_eq!("random".parse::<DatasetKind>(), Ok(DatasetKind::Random));
        assert_eq!("linear".parse::<DatasetKind>(), Ok(DatasetKind::Linear));
        assert_eq!("quadratic".parse::<DatasetKind>(), Ok(DatasetKind::Linear));
    }

    #[test]
    fn requested_size() {
        for &kind in &[
            DatasetKind::Linear,
            DatasetKind::Noisy,
            DatasetKind::Outliers,
            DatasetKind::Random,
        ] {
            assert_eq!(generate_dataset(kind, 20).len(), 20);
            assert_eq!(generate_dataset(kind, 3).len(), 3);
            assert!(generate_dataset(kind, 0).is_empty());
        }
    }

    #[test]
    fn linear_follows_the_trend() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let points = generate_dataset_with_rng(DatasetKind::Linear, 50, &mut rng);
        let line = fit(&points);

        assert_abs_diff_eq!(line.slope, TREND_SLOPE, epsilon = 0.2);
        assert_abs_diff_eq!(line.intercept, TREND_INTERCEPT, epsilon = 0.75);
        for p in &points {
            assert!(p.residual(TREND_SLOPE, TREND_INTERCEPT).abs() <= LINEAR_NOISE);
        }
    }

    #[test]
    fn noisy_has_a_wider_band() {
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        let points = generate_dataset_with_rng(DatasetKind::Noisy, 200, &mut rng);
        let line = fit(&points);

        assert_abs_diff_eq!(line.slope, TREND_SLOPE, epsilon = 0.4);
        assert!(points
            .iter()
            .all(|p| p.residual(TREND_SLOPE, TREND_INTERCEPT).abs() <= NOISY_NOISE));
        assert!(points
            .iter()
            .any(|p| p.residual(TREND_SLOPE, TREND_INTERCEPT).abs() > LINEAR_NOISE));
    }

    #[test]
    fn outliers_are_injected_at_fixed_positions() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let points = generate_dataset_with_rng(DatasetKind::Outliers, 20, &mut rng);

        for (idx, p) in points.iter().enumerate() {
            let deviation = p.residual(TREND_SLOPE, TREND_INTERCEPT).abs();
            if OUTLIER_INDICES.contains(&idx) {
                assert!(deviation >= OUTLIER_OFFSET - LINEAR_NOISE);
            } else {
                assert!(deviation <= LINEAR_NOISE);
            }
        }

        let outliers = detect_outliers(&points, TREND_SLOPE, TREND_INTERCEPT);
        assert!(outliers.contains(&5));
        assert!(outliers.contains(&15));
    }

    #[test]
    fn short_outlier_dataset_only_reaches_first_position() {
        let mut rng = Xoshiro256Plus::seed_from_u64(11);
        let points = generate_dataset_with_rng(DatasetKind::Outliers, 10, &mut rng);

        assert!(points[5].residual(TREND_SLOPE, TREND_INTERCEPT).abs() >= OUTLIER_OFFSET - 1.0);
        assert_eq!(
            points
                .iter()
                .filter(|p| p.residual(TREND_SLOPE, TREND_INTERCEPT).abs() > LINEAR_NOISE)
                .count(),
            1
        );
    }

    #[test]
    fn random_is_uncorrelated_scatter() {
        let mut rng = Xoshiro256Plus::seed_from_u64(1);
        let points = generate_dataset_with_rng(DatasetKind::Random, 500, &mut rng);

        assert!(points.iter().all(|p| (0.0..X_SPAN).contains(&p.x)));
        assert!(points.iter().all(|p| (0.0..RANDOM_Y_SPAN).contains(&p.y)));
        assert!(fit(&points).slope.abs() < 0.5);
    }
}
