use libration_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a solve once `|residual| < threshold`.
///
/// Useful when a coarser answer than the solver's own tolerance is enough for
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow {
    threshold: f64,
}

impl StopBelow {
    /// Creates an observer with the given residual threshold.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual().abs() < self.threshold).then(A::stop_early)
    }
}
