//! `regression-lab` is the numerical core of an interactive course on simple linear regression.
//!
//! Every lesson of the course (hypothesis, cost, gradient descent, metrics, outliers,
//! regularization) draws its numbers from this crate, the presentation layer only renders them.
//! All functions are pure and operate on an in-memory slice of [`Point`]s.
//!
//! ## Current state
//!
//! * [`fit`]: closed-form ordinary least squares line
//! * [`metrics`]: MSE, RMSE, MAE and R² of an arbitrary line
//! * [`gradient_descent()`]: batch gradient descent with a replayable history and divergence
//!   detection
//! * [`cost_surface()`]: the mean squared error sampled over a `(slope, intercept)` grid
//! * [`detect_outliers`]: residual outliers after the IQR rule
//! * [`ridge_penalty`] and [`lasso_penalty`]: L2 and L1 penalty terms
//!
//! Synthetic datasets for the lessons live in the `regression-lab-datasets` crate.
//!
//! ## Degenerate input
//!
//! Empty datasets, single points, constant `x` or constant `y` never panic and never produce
//! `NaN`; each has a documented zero result. Only parameters which make a computation
//! meaningless, like a non-finite learning rate, are rejected with an [`Error`].
//!
//! ```
//! use regression_lab::prelude::*;
//!
//! let points = points_from_pairs(&[(1.0f64, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0)]);
//! let line = fit(&points);
//! let metrics = line.metrics(&points);
//! assert!(metrics.r2 > 0.999);
//!
//! let run = GradientDescentParams::new()
//!     .learning_rate(0.05)
//!     .iterations(500)
//!     .run(&points)?;
//! assert!(run.converged);
//! # Ok::<(), regression_lab::Error>(())
//! ```

pub mod cost_surface;
pub mod dataset;
pub mod error;
pub mod format;
pub mod gradient_descent;
mod metrics_regression;
mod ols;
pub mod outliers;
mod param_guard;
pub mod prelude;
pub mod regularization;

pub use cost_surface::{cost_surface, CostSurface, CostSurfaceParams, CostSurfaceValidParams};
pub use dataset::{points_from_pairs, Float, Point};
pub use error::{Error, Result};
pub use format::format_fixed;
pub use gradient_descent::{
    gradient_descent, EpochRecord, GradientDescent, GradientDescentParams,
    GradientDescentValidParams, OptimizationRun,
};
pub use ols::{fit, FitResult, Prediction};
pub use outliers::detect_outliers;
pub use param_guard::ParamGuard;
pub use regularization::{lasso_penalty, regularized_cost, ridge_penalty, Penalty};

/// Error metrics of a line against a point set
pub mod metrics {
    pub use crate::metrics_regression::{
        mean_absolute_error, mean_squared_error, metric_set, r2, root_mean_squared_error,
        MetricSet,
    };
}
