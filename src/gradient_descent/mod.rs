//! Batch gradient descent
//!
//! Minimises the mean squared error of a line by repeatedly stepping both parameters against
//! their gradient. The full history of a run is recorded so that a presentation layer can replay
//! it at any speed; [`GradientDescent`] computes the same history lazily, one epoch at a time.
//!
//! A learning rate that is too large makes the loss blow up. This is not an error: the run
//! stops right after the first non-finite loss and reports `converged == false`.
mod algorithm;
mod hyperparams;

pub use algorithm::{gradient_descent, EpochRecord, GradientDescent, OptimizationRun};
pub use hyperparams::{GradientDescentParams, GradientDescentValidParams};
