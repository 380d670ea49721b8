//! Regularization penalties
//!
//! Ridge adds `lambda * w²` and lasso adds `lambda * |w|` to a base cost. The base cost can be
//! any precomputed value; `lambda` is not validated.

use crate::dataset::{Float, Point};
use crate::metrics_regression::mean_squared_error;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Default regularization strength
pub const DEFAULT_LAMBDA: f64 = 0.1;

/// `base_cost + lambda * weight²`
pub fn ridge_penalty<F: Float>(base_cost: F, weight: F, lambda: F) -> F {
    base_cost + lambda * weight * weight
}

/// `base_cost + lambda * |weight|`
pub fn lasso_penalty<F: Float>(base_cost: F, weight: F, lambda: F) -> F {
    base_cost + lambda * weight.abs()
}

/// A regularization term together with its strength
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Penalty<F> {
    /// L2 penalty
    Ridge(F),
    /// L1 penalty
    Lasso(F),
}

impl<F: Float> Penalty<F> {
    pub fn ridge() -> Self {
        Penalty::Ridge(F::cast(DEFAULT_LAMBDA))
    }

    pub fn lasso() -> Self {
        Penalty::Lasso(F::cast(DEFAULT_LAMBDA))
    }

    pub fn lambda(&self) -> F {
        match *self {
            Penalty::Ridge(lambda) | Penalty::Lasso(lambda) => lambda,
        }
    }

    /// Add the penalty of `weight` to `base_cost`
    pub fn apply(&self, base_cost: F, weight: F) -> F {
        match *self {
            Penalty::Ridge(lambda) => ridge_penalty(base_cost, weight, lambda),
            Penalty::Lasso(lambda) => lasso_penalty(base_cost, weight, lambda),
        }
    }
}

/// Mean squared error of the line plus the penalty on its slope
///
/// The intercept is left unpenalized.
pub fn regularized_cost<F: Float>(
    points: &[Point<F>],
    slope: F,
    intercept: F,
    penalty: Penalty<F>,
) -> F {
    penalty.apply(mean_squared_error(points, slope, intercept), slope)
}
