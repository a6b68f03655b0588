use std::convert::Infallible;

/// A scalar equation `f(x) = 0` that a bracketing solver can drive.
///
/// Evaluation is fallible so an equation can refuse points where it is not
/// defined (for example a singularity) instead of handing the solver an
/// infinite or NaN residual.
pub trait ScalarEquation {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the residual at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residual cannot be computed at `x`.
    fn residual(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T: ScalarEquation + ?Sized> ScalarEquation for &T {
    type Error = T::Error;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).residual(x)
    }
}

/// Wraps an infallible closure so it can be used as a [`ScalarEquation`].
///
/// ```
/// use libration_core::{FnEquation, ScalarEquation};
///
/// let f = FnEquation::new(|x: f64| x * x - 2.0);
/// assert_eq!(f.residual(2.0), Ok(2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnEquation<F> {
    f: F,
}

impl<F> FnEquation<F>
where
    F: Fn(f64) -> f64,
{
    /// Creates an equation from a residual closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ScalarEquation for FnEquation<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.f)(x))
    }
}
