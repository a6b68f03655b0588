use thiserror::Error;

use super::{Point, Side};

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Residuals at the endpoints do not have strictly opposite signs.
    #[error("no sign change")]
    NoSignChange,
}

/// Ordered finite bounds supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

/// The working endpoints `(a, f_a)` and `(b, f_b)` of a solve.
///
/// The residuals at `a` and `b` keep strictly opposite signs across every
/// update until the solver exits. The endpoints themselves are not kept in
/// order: an update may leave `a` to the right of `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    a: Point,
    b: Point,
}

impl Bracket {
    /// Creates a bracket from evaluated endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` unless the residuals have strictly
    /// opposite signs.
    pub(super) fn new(a: Point, b: Point) -> Result<Self, BracketError> {
        if !opposite_signs(a.residual, b.residual) {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self { a, b })
    }

    pub(super) fn a(&self) -> Point {
        self.a
    }

    pub(super) fn b(&self) -> Point {
        self.b
    }

    pub(super) fn as_points(&self) -> [Point; 2] {
        [self.a, self.b]
    }

    /// Classical false-position point of the current endpoints.
    pub(super) fn false_position(&self) -> f64 {
        let Point { x: a, residual: fa } = self.a;
        let Point { x: b, residual: fb } = self.b;
        (a * fb - b * fa) / (fb - fa)
    }

    /// Replaces endpoints after evaluating the false-position point `c` and
    /// the weighted trial point `x`.
    pub(super) fn update(&mut self, side: Side, c: Point, x: Point) {
        match side {
            Side::TowardA => self.update_toward_a(c, x),
            Side::TowardB => self.update_toward_b(c, x),
        }
    }

    /// Root was in `[a, c]`.
    ///
    /// Keeps `a` while `x` still straddles the root with it. Otherwise `x`
    /// takes over `a` and `c` becomes the new `b`.
    fn update_toward_a(&mut self, c: Point, x: Point) {
        if opposite_signs(self.a.residual, x.residual) {
            self.b = x;
        } else {
            self.a = x;
            self.b = c;
        }
    }

    /// Root was in `[c, b]`.
    ///
    /// If `x` straddles the root with `a`, the root sits between `c` and `x`.
    /// Otherwise only `a` moves, to `x`, and `b` stays put.
    fn update_toward_b(&mut self, c: Point, x: Point) {
        if opposite_signs(self.a.residual, x.residual) {
            self.a = c;
            self.b = x;
        } else {
            self.a = x;
        }
    }
}

/// Returns true if `u` and `v` are nonzero with opposite signs.
///
/// Unlike `u * v < 0.0`, this holds for residuals whose product underflows.
pub(super) fn opposite_signs(u: f64, v: f64) -> bool {
    (u < 0.0 && v > 0.0) || (u > 0.0 && v < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bracket(a: (f64, f64), b: (f64, f64)) -> Bracket {
        Bracket::new(Point::new(a.0, a.1), Point::new(b.0, b.1)).expect("valid bracket")
    }

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_eq!(bounds.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite)
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert!(matches!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth)
        ));
    }

    #[test]
    fn new_bracket_requires_strict_sign_change() {
        let same = Bracket::new(Point::new(0.0, 1.0), Point::new(1.0, 2.0));
        assert_eq!(same, Err(BracketError::NoSignChange));

        let zero = Bracket::new(Point::new(0.0, 0.0), Point::new(1.0, -2.0));
        assert_eq!(zero, Err(BracketError::NoSignChange));
    }

    #[test]
    fn opposite_signs_survives_underflow() {
        assert!(opposite_signs(1e-200, -1e-200));
        assert!(!opposite_signs(-1e-200, -1e-200));
        assert!(!opposite_signs(0.0, -1.0));
        assert!(!opposite_signs(-0.0, 1.0));
    }

    #[test]
    fn false_position_of_a_line_is_its_root() {
        // f(x) = 2x - 6 sampled at 0 and 10.
        let bracket = bracket((0.0, -6.0), (10.0, 14.0));
        assert_relative_eq!(bracket.false_position(), 3.0);
    }

    #[test]
    fn toward_a_straddling_trial_replaces_b() {
        let mut bracket = bracket((0.0, -1.0), (4.0, 3.0));
        let c = Point::new(2.0, 0.5);
        let x = Point::new(1.5, 0.25);

        bracket.update(Side::TowardA, c, x);

        assert_eq!(bracket.a(), Point::new(0.0, -1.0));
        assert_eq!(bracket.b(), x);
    }

    #[test]
    fn toward_a_same_side_trial_moves_both_endpoints() {
        let mut bracket = bracket((0.0, -1.0), (4.0, 3.0));
        let c = Point::new(2.0, 0.5);
        let x = Point::new(1.5, -0.25);

        bracket.update(Side::TowardA, c, x);

        assert_eq!(bracket.a(), x);
        assert_eq!(bracket.b(), c);
    }

    #[test]
    fn toward_b_straddling_trial_moves_both_endpoints() {
        let mut bracket = bracket((0.0, -1.0), (4.0, 3.0));
        let c = Point::new(1.0, -0.5);
        let x = Point::new(2.0, 0.5);

        bracket.update(Side::TowardB, c, x);

        assert_eq!(bracket.a(), c);
        assert_eq!(bracket.b(), x);
    }

    #[test]
    fn toward_b_same_side_trial_only_moves_a() {
        let mut bracket = bracket((0.0, -1.0), (4.0, 3.0));
        let c = Point::new(1.0, -0.5);
        let x = Point::new(1.5, -0.2);

        bracket.update(Side::TowardB, c, x);

        assert_eq!(bracket.a(), x);
        assert_eq!(bracket.b(), Point::new(4.0, 3.0));
    }
}
