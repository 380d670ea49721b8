use crate::error::Error;
use crate::{Float, ParamGuard};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A verified hyper-parameter set ready for running batch gradient descent
///
/// See [`GradientDescentParams`](crate::GradientDescentParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescentValidParams<F> {
    pub(crate) learning_rate: F,
    pub(crate) iterations: usize,
    pub(crate) initial_slope: F,
    pub(crate) initial_intercept: F,
}

impl<F: Float> GradientDescentValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn initial_slope(&self) -> F {
        self.initial_slope
    }

    pub fn initial_intercept(&self) -> F {
        self.initial_intercept
    }
}

/// Hyper-parameters of batch gradient descent on the mean squared error
///
/// Any finite learning rate is accepted, including rates large enough to make the run diverge.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescentParams<F>(pub(crate) GradientDescentValidParams<F>);

impl<F: Float> Default for GradientDescentParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> GradientDescentParams<F> {
    /// Create new hyper-parameters with the default values
    pub fn new() -> Self {
        Self(GradientDescentValidParams {
            learning_rate: F::cast(0.01),
            iterations: 100,
            initial_slope: F::zero(),
            initial_intercept: F::zero(),
        })
    }

    /// Set the step size.
    ///
    /// Defaults to `0.01` if not set
    ///
    /// `learning_rate` must be finite
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the maximal number of epochs.
    ///
    /// Defaults to `100` if not set
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.0.iterations = iterations;
        self
    }

    /// Set the slope the descent starts from.
    ///
    /// Defaults to `0.0` if not set
    pub fn initial_slope(mut self, slope: F) -> Self {
        self.0.initial_slope = slope;
        self
    }

    /// Set the intercept the descent starts from.
    ///
    /// Defaults to `0.0` if not set
    pub fn initial_intercept(mut self, intercept: F) -> Self {
        self.0.initial_intercept = intercept;
        self
    }
}

impl<F: Float> ParamGuard for GradientDescentParams<F> {
    type Checked = GradientDescentValidParams<F>;
    type Error = Error;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let to_f64 = |v: F| v.to_f64().unwrap_or(f64::NAN);

        if !self.0.learning_rate.is_finite() {
            Err(Error::InvalidLearningRate(to_f64(self.0.learning_rate)))
        } else if !self.0.initial_slope.is_finite() {
            Err(Error::InvalidInitialValue(
                "slope",
                to_f64(self.0.initial_slope),
            ))
        } else if !self.0.initial_intercept.is_finite() {
            Err(Error::InvalidInitialValue(
                "intercept",
                to_f64(self.0.initial_intercept),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = GradientDescentParams::<f64>::default().check_unwrap();

        assert_eq!(params.learning_rate(), 0.01);
        assert_eq!(params.iterations(), 100);
        assert_eq!(params.initial_slope(), 0.0);
        assert_eq!(params.initial_intercept(), 0.0);
    }

    #[test]
    fn diverging_rates_are_accepted() {
        for &rate in &[0.0, -0.5, 10.0, 1e6] {
            assert!(GradientDescentParams::<f64>::new()
                .learning_rate(rate)
                .check()
                .is_ok());
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = GradientDescentParams::<f64>::new()
            .learning_rate(f64::INFINITY)
            .check()
            .unwrap_err();
        assert_eq!(err, Error::InvalidLearningRate(f64::INFINITY));

        let err = GradientDescentParams::<f32>::new()
            .initial_intercept(f32::NEG_INFINITY)
            .check()
            .unwrap_err();
        assert_eq!(err, Error::InvalidInitialValue("intercept", f64::NEG_INFINITY));

        assert!(GradientDescentParams::<f64>::new()
            .initial_slope(f64::NAN)
            .check()
            .is_err());
    }
}
