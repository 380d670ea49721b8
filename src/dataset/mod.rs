//! Datasets
//!
//! This module implements the point type and the floating point bound shared by every
//! algorithm of the crate. A dataset is simply an ordered slice of points; the order is
//! preserved for display but never influences a computed statistic.
use ndarray::ScalarOperand;
use num_traits::{FromPrimitive, NumAssignOps, NumCast};
use rand::distributions::uniform::SampleUniform;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use std::fmt;
use std::iter::Sum;

mod impl_points;

pub use impl_points::Summary;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Both coordinates of a point, every metric
/// and every optimizer parameter share this type.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + SampleUniform
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// A single observation `(x, y)`
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point<F> {
    pub fn new(x: F, y: F) -> Self {
        Point { x, y }
    }

    /// Signed vertical distance between the observation and the line `slope * x + intercept`
    pub fn residual(&self, slope: F, intercept: F) -> F {
        self.y - predict(slope, intercept, self.x)
    }
}

impl<F: Float> From<(F, F)> for Point<F> {
    fn from((x, y): (F, F)) -> Self {
        Point { x, y }
    }
}

/// Collect `(x, y)` pairs into points, keeping their order
pub fn points_from_pairs<F: Float>(pairs: &[(F, F)]) -> Vec<Point<F>> {
    pairs.iter().copied().map(Point::from).collect()
}

/// Evaluate the line `slope * x + intercept`
#[inline]
pub(crate) fn predict<F: Float>(slope: F, intercept: F, x: F) -> F {
    slope * x + intercept
}
