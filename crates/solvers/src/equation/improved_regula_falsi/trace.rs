use std::ops::Deref;

/// Residual magnitudes `|f(x)|`, one per iteration, in iteration order.
///
/// The first entry belongs to the first trial point; endpoint residuals are
/// not recorded. Values usually shrink but are not guaranteed to decrease
/// monotonically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceTrace(Vec<f64>);

impl ConvergenceTrace {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(super) fn push(&mut self, residual: f64) {
        self.0.push(residual.abs());
    }

    /// Returns the residual magnitudes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the trace and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for ConvergenceTrace {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ConvergenceTrace {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
