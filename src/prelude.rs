//! regression-lab prelude.
//!
//! This module contains the most used types, traits and functions that you can import easily
//! as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;

#[doc(no_inline)]
pub use crate::dataset::{points_from_pairs, Float, Point};

#[doc(no_inline)]
pub use crate::ols::{fit, FitResult, Prediction};

#[doc(no_inline)]
pub use crate::metrics::*;

#[doc(no_inline)]
pub use crate::gradient_descent::{
    gradient_descent, EpochRecord, GradientDescentParams, OptimizationRun,
};

#[doc(no_inline)]
pub use crate::cost_surface::{cost_surface, CostSurface, CostSurfaceParams};

#[doc(no_inline)]
pub use crate::outliers::detect_outliers;

#[doc(no_inline)]
pub use crate::regularization::{lasso_penalty, regularized_cost, ridge_penalty, Penalty};

#[doc(no_inline)]
pub use crate::format::format_fixed;
