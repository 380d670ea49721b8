//! Cost surface sampling
//!
//! Evaluates the mean squared error over a regular grid of `(slope, intercept)` pairs. The
//! three returned grids share their shape and are indexed `[i][j]`, where `i` walks the slope
//! axis and `j` the intercept axis.

use log::debug;
use ndarray::Array2;

use crate::dataset::{Float, Point};
use crate::error::{Error, Result};
use crate::metrics_regression::mean_squared_error;
use crate::ParamGuard;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Sampled cost surface
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct CostSurface<F> {
    pub slopes: Array2<F>,
    pub intercepts: Array2<F>,
    pub costs: Array2<F>,
}

impl<F: Float> CostSurface<F> {
    /// Shape shared by all three grids
    pub fn shape(&self) -> (usize, usize) {
        self.costs.dim()
    }

    /// Grid vertex with the smallest cost as `(slope, intercept, cost)`
    ///
    /// Vertices with a non-finite cost are skipped.
    pub fn min_cost(&self) -> Option<(F, F, F)> {
        self.costs
            .indexed_iter()
            .filter(|(_, cost)| cost.is_finite())
            .fold(None, |best: Option<((usize, usize), F)>, (idx, &cost)| match best {
                Some((_, best_cost)) if best_cost <= cost => best,
                _ => Some((idx, cost)),
            })
            .map(|(idx, cost)| (self.slopes[idx], self.intercepts[idx], cost))
    }
}

/// A verified set of sampling parameters
///
/// See [`CostSurfaceParams`] for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct CostSurfaceValidParams<F> {
    slope_range: (F, F),
    intercept_range: (F, F),
    resolution: usize,
}

/// Sampling parameters of a cost surface
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct CostSurfaceParams<F>(CostSurfaceValidParams<F>);

impl<F: Float> Default for CostSurfaceParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> CostSurfaceParams<F> {
    pub fn new() -> Self {
        Self(CostSurfaceValidParams {
            slope_range: (F::cast(-2.0), F::cast(2.0)),
            intercept_range: (F::cast(-5.0), F::cast(5.0)),
            resolution: 30,
        })
    }

    /// Set the sampled slope interval `[min, max]`.
    ///
    /// Defaults to `[-2, 2]`
    pub fn slope_range(mut self, min: F, max: F) -> Self {
        self.0.slope_range = (min, max);
        self
    }

    /// Set the sampled intercept interval `[min, max]`.
    ///
    /// Defaults to `[-5, 5]`
    pub fn intercept_range(mut self, min: F, max: F) -> Self {
        self.0.intercept_range = (min, max);
        self
    }

    /// Set the number of steps along each axis, the grid has `resolution + 1` vertices per axis.
    ///
    /// Defaults to `30`, must be at least `1`
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.0.resolution = resolution;
        self
    }

    /// Check the parameters and sample the surface
    pub fn sample(&self, points: &[Point<F>]) -> Result<CostSurface<F>> {
        Ok(self.check_ref()?.sample(points))
    }
}

fn check_range<F: Float>(name: &'static str, (min, max): (F, F)) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
        let to_f64 = |v: F| v.to_f64().unwrap_or(f64::NAN);
        return Err(Error::InvalidRange(name, to_f64(min), to_f64(max)));
    }
    Ok(())
}

impl<F: Float> ParamGuard for CostSurfaceParams<F> {
    type Checked = CostSurfaceValidParams<F>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.resolution == 0 {
            return Err(Error::InvalidResolution(self.0.resolution));
        }
        check_range("slope", self.0.slope_range)?;
        check_range("intercept", self.0.intercept_range)?;

        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float> CostSurfaceValidParams<F> {
    pub fn slope_range(&self) -> (F, F) {
        self.slope_range
    }

    pub fn intercept_range(&self) -> (F, F) {
        self.intercept_range
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Evaluate the mean squared error at every grid vertex
    pub fn sample(&self, points: &[Point<F>]) -> CostSurface<F> {
        let steps = F::cast(self.resolution);
        let (slope_min, slope_max) = self.slope_range;
        let (intercept_min, intercept_max) = self.intercept_range;
        let slope_step = (slope_max - slope_min) / steps;
        let intercept_step = (intercept_max - intercept_min) / steps;

        let shape = (self.resolution + 1, self.resolution + 1);
        debug!(
            "sampling cost surface on a {}x{} grid over {} points",
            shape.0,
            shape.1,
            points.len()
        );

        let slopes = Array2::from_shape_fn(shape, |(i, _)| slope_min + F::cast(i) * slope_step);
        let intercepts =
            Array2::from_shape_fn(shape, |(_, j)| intercept_min + F::cast(j) * intercept_step);
        let costs = Array2::from_shape_fn(shape, |idx| {
            mean_squared_error(points, slopes[idx], intercepts[idx])
        });

        CostSurface {
            slopes,
            intercepts,
            costs,
        }
    }
}

/// Sample the mean squared error over a `(resolution + 1) x (resolution + 1)` parameter grid
pub fn cost_surface<F: Float>(
    points: &[Point<F>],
    slope_range: (F, F),
    intercept_range: (F, F),
    resolution: usize,
) -> Result<CostSurface<F>> {
    CostSurfaceParams::new()
        .slope_range(slope_range.0, slope_range.1)
        .intercept_range(intercept_range.0, intercept_range.1)
        .resolution(resolution)
        .sample(points)
}
