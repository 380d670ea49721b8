use log::{debug, warn};

use super::hyperparams::{GradientDescentParams, GradientDescentValidParams};
use crate::dataset::{predict, Float, Point};
use crate::error::Result;
use crate::metrics_regression::mean_squared_error;
use crate::ParamGuard;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// State of the line after a single epoch
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochRecord<F> {
    /// 1-based epoch number
    pub epoch: usize,
    /// Slope after the update
    pub slope: F,
    /// Intercept after the update
    pub intercept: F,
    /// Mean squared error of the updated line
    pub loss: F,
    pub slope_gradient: F,
    pub intercept_gradient: F,
}

/// A complete gradient descent run, replayable epoch by epoch
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationRun<F> {
    pub final_slope: F,
    pub final_intercept: F,
    pub history: Vec<EpochRecord<F>>,
    /// `true` iff at least one epoch ran and the last loss is finite
    pub converged: bool,
}

impl<F: Float> OptimizationRun<F> {
    /// Record of the given 1-based epoch
    pub fn epoch(&self, epoch: usize) -> Option<&EpochRecord<F>> {
        epoch.checked_sub(1).and_then(|idx| self.history.get(idx))
    }

    /// Loss after the last executed epoch
    pub fn final_loss(&self) -> Option<F> {
        self.history.last().map(|record| record.loss)
    }

    /// Whether the run stopped early because the loss left the finite range
    pub fn diverged(&self) -> bool {
        self.final_loss().map_or(false, |loss| !loss.is_finite())
    }
}

/// Resumable batch gradient descent
///
/// Every call to `next` performs one epoch and yields its record. The iterator ends after the
/// configured number of epochs, or directly after the first epoch whose loss is not finite.
#[derive(Debug, Clone)]
pub struct GradientDescent<'a, F> {
    points: &'a [Point<F>],
    learning_rate: F,
    iterations: usize,
    epoch: usize,
    slope: F,
    intercept: F,
    halted: bool,
}

impl<'a, F: Float> GradientDescent<'a, F> {
    pub fn new(params: &GradientDescentValidParams<F>, points: &'a [Point<F>]) -> Self {
        GradientDescent {
            points,
            learning_rate: params.learning_rate(),
            iterations: params.iterations(),
            epoch: 0,
            slope: params.initial_slope(),
            intercept: params.initial_intercept(),
            halted: false,
        }
    }

    /// Current slope, the initial one before the first epoch
    pub fn slope(&self) -> F {
        self.slope
    }

    /// Current intercept, the initial one before the first epoch
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Number of epochs executed so far
    pub fn epochs_done(&self) -> usize {
        self.epoch
    }

    /// Gradients of the mean squared error at the current line
    ///
    /// An empty point set has no gradient, both components are zero then.
    fn gradients(&self) -> (F, F) {
        if self.points.is_empty() {
            return (F::zero(), F::zero());
        }

        let (mut slope_grad, mut intercept_grad) = (F::zero(), F::zero());
        for p in self.points {
            let error = predict(self.slope, self.intercept, p.x) - p.y;
            slope_grad += error * p.x;
            intercept_grad += error;
        }

        let scale = F::cast(2.0) / F::cast(self.points.len());
        (scale * slope_grad, scale * intercept_grad)
    }
}

impl<'a, F: Float> Iterator for GradientDescent<'a, F> {
    type Item = EpochRecord<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted || self.epoch >= self.iterations {
            return None;
        }

        let (slope_gradient, intercept_gradient) = self.gradients();
        self.slope -= self.learning_rate * slope_gradient;
        self.intercept -= self.learning_rate * intercept_gradient;
        self.epoch += 1;

        let loss = mean_squared_error(self.points, self.slope, self.intercept);
        if !loss.is_finite() {
            self.halted = true;
        }

        Some(EpochRecord {
            epoch: self.epoch,
            slope: self.slope,
            intercept: self.intercept,
            loss,
            slope_gradient,
            intercept_gradient,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.halted {
            (0, Some(0))
        } else {
            (0, Some(self.iterations - self.epoch))
        }
    }
}

impl<F: Float> GradientDescentValidParams<F> {
    /// Start a resumable descent over `points`
    pub fn steps<'a>(&self, points: &'a [Point<F>]) -> GradientDescent<'a, F> {
        GradientDescent::new(self, points)
    }

    /// Run the descent to completion
    pub fn run(&self, points: &[Point<F>]) -> OptimizationRun<F> {
        debug!(
            "gradient descent over {} points, learning rate {}, {} iterations",
            points.len(),
            self.learning_rate,
            self.iterations
        );

        let mut steps = self.steps(points);
        let history: Vec<EpochRecord<F>> = steps.by_ref().collect();
        let converged = history.last().map_or(false, |record| record.loss.is_finite());

        if !converged && !history.is_empty() {
            warn!(
                "gradient descent diverged at epoch {} of {}",
                history.len(),
                self.iterations
            );
        } else {
            debug!("gradient descent finished after {} epochs", history.len());
        }

        OptimizationRun {
            final_slope: steps.slope(),
            final_intercept: steps.intercept(),
            history,
            converged,
        }
    }
}

impl<F: Float> GradientDescentParams<F> {
    /// Check the hyper-parameters and run the descent to completion
    pub fn run(&self, points: &[Point<F>]) -> Result<OptimizationRun<F>> {
        Ok(self.check_ref()?.run(points))
    }
}

/// Batch gradient descent on the mean squared error of the line `slope * x + intercept`
///
/// Fails only for non-finite hyper-parameters; a diverging run is reported through
/// [`OptimizationRun::converged`].
pub fn gradient_descent<F: Float>(
    points: &[Point<F>],
    learning_rate: F,
    iterations: usize,
    initial_slope: F,
    initial_intercept: F,
) -> Result<OptimizationRun<F>> {
    GradientDescentParams::new()
        .learning_rate(learning_rate)
        .iterations(iterations)
        .initial_slope(initial_slope)
        .initial_intercept(initial_intercept)
        .run(points)
}
