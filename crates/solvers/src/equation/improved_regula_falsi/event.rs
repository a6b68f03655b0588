use super::{Point, Side};

/// Event emitted by the improved regula falsi solver after each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Side of the false-position point holding the root.
    pub side: Side,

    /// Acceleration weight `k` used for the trial point.
    pub weight: f64,

    /// Classical false-position point `c` and its residual.
    pub false_position: Point,

    /// Weighted trial point `x` and its residual.
    pub trial: Point,

    /// Endpoints `a` and `b` after this iteration's update.
    pub bracket: [Point; 2],
}
