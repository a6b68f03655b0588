use super::{ConvergenceTrace, Point};

/// Indicates how a successful solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual magnitude reached the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an improved regula falsi solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate: the last trial point, or an endpoint that already met
    /// the tolerance.
    pub x: f64,

    /// Residual at the root estimate.
    pub residual: f64,

    /// Iterations performed.
    pub iters: usize,

    /// Per-iteration residual magnitudes, `trace.len() == iters`.
    pub trace: ConvergenceTrace,

    /// Endpoints `[a, b]` when the solver finished.
    pub bracket: [f64; 2],
}

impl Solution {
    /// A solution at a bracket endpoint, before any iteration.
    pub(super) fn at_endpoint(point: Point, bracket: [f64; 2]) -> Self {
        Self {
            status: Status::Converged,
            x: point.x,
            residual: point.residual,
            iters: 0,
            trace: ConvergenceTrace::default(),
            bracket,
        }
    }
}
