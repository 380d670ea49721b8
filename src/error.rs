//! Error types in regression-lab
//!
//! Degenerate data never produces an error, only parameters which make a computation
//! meaningless do.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("learning rate should be finite, but is {0}")]
    InvalidLearningRate(f64),
    #[error("initial {0} should be finite, but is {1}")]
    InvalidInitialValue(&'static str, f64),
    #[error("resolution should be at least 1, but is {0}")]
    InvalidResolution(usize),
    #[error("invalid {0} range [{1}, {2}]")]
    InvalidRange(&'static str, f64, f64),
}
