use super::{Point, bracket::Bracket, bracket::opposite_signs};

/// Which part of the bracket holds the root after the false-position step.
///
/// The two sides are handled by separate update paths that are not mirror
/// images of each other, see [`Side::TowardA`] and [`Side::TowardB`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `f(a)` and `f(c)` have opposite signs: the root lies in `[a, c]` and
    /// `b` is the far endpoint.
    ///
    /// A trial point that does not straddle the root with `a` replaces `a`,
    /// and `c` also replaces `b`.
    TowardA,

    /// The root lies in `[c, b]` and `a` is the far endpoint.
    ///
    /// A trial point that straddles the root with `a` replaces `b`, and `c`
    /// replaces `a`. Otherwise only `a` moves.
    TowardB,
}

impl Side {
    /// Picks the side from the residual at the false-position point `c`.
    pub(super) fn select(bracket: &Bracket, c: Point) -> Self {
        if opposite_signs(bracket.a().residual, c.residual) {
            Side::TowardA
        } else {
            Side::TowardB
        }
    }

    /// Acceleration weight `k = (|f(c)| mod |f_far|) / |f_far|`, in `[0, 1)`.
    ///
    /// When `|f(c)| >= |f_far|` the modulo wraps instead of clamping, so `k`
    /// is not a plain residual ratio.
    pub(super) fn weight(self, bracket: &Bracket, c: Point) -> f64 {
        let far = match self {
            Side::TowardA => bracket.b().residual.abs(),
            Side::TowardB => bracket.a().residual.abs(),
        };
        (c.residual.abs() % far) / far
    }

    /// Weighted secant point blending the endpoints with `k - 1`.
    pub(super) fn trial_point(self, bracket: &Bracket, weight: f64) -> f64 {
        let Point { x: a, residual: fa } = bracket.a();
        let Point { x: b, residual: fb } = bracket.b();
        let m = weight - 1.0;

        match self {
            Side::TowardA => (m * b * fa + a * fb) / (m * fa + fb),
            Side::TowardB => (m * a * fb + b * fa) / (m * fb + fa),
        }
    }
}
