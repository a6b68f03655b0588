//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasEstimate`]: events that carry the current root estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use libration_core::Observer;
//! use libration_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use libration_solvers::equation::improved_regula_falsi;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries the solver's current root estimate.
pub trait HasEstimate {
    /// Returns the root estimate for this event.
    fn estimate(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for improved_regula_falsi::Event {
    fn residual(&self) -> f64 {
        self.trial.residual
    }
}

impl HasEstimate for improved_regula_falsi::Event {
    fn estimate(&self) -> f64 {
        self.trial.x
    }
}

impl CanStopEarly for improved_regula_falsi::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
