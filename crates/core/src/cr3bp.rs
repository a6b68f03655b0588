//! The collinear equilibrium condition of the circular restricted three-body
//! problem.
//!
//! In the rotating, normalized frame the larger primary sits at `-u2` and the
//! smaller at `u1`, where `u1` and `u2` are the normalized primary masses.
//! Along the axis joining them, a massless body is in equilibrium where
//!
//! ```text
//! f(x) = x - u1 (x + u2) / |x + u2|³ - u2 (x - u1) / |x - u1|³ = 0
//! ```
//!
//! The three roots are the collinear libration points. The equation is
//! singular at both primary positions.

use std::fmt;

use thiserror::Error;

use crate::ScalarEquation;

/// Normalized mass of the larger Earth–Moon primary.
const EARTH_MOON_U1: f64 = 0.98785;

/// Allowed deviation of `u1 + u2` from 1.
const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Mass-ratio parameters of a CR3BP system.
///
/// Each system is an explicit value, so different systems can be solved side
/// by side without sharing state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Cr3bpParams", into = "Cr3bpParams")
)]
pub struct Cr3bp {
    u1: f64,
    u2: f64,
}

/// Errors that can occur when constructing a [`Cr3bp`] system.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MassRatioError {
    #[error("mass parameter {name} is not finite: {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("mass parameter {name} must lie in (0, 1), got {value}")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("normalized masses must sum to 1, got u1 + u2 = {sum}")]
    NotNormalized { sum: f64 },
}

impl Cr3bp {
    /// Creates a system from the normalized masses of both primaries.
    ///
    /// `u1` belongs to the larger primary (at `-u2`), `u2` to the smaller
    /// primary (at `u1`).
    ///
    /// The primaries sit one unit apart, so the masses must sum to 1.
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is non-finite or outside `(0, 1)`,
    /// or if `u1 + u2` differs from 1 by more than `1e-9`.
    pub fn new(u1: f64, u2: f64) -> Result<Self, MassRatioError> {
        check_mass("u1", u1)?;
        check_mass("u2", u2)?;

        let sum = u1 + u2;
        if (sum - 1.0).abs() > NORMALIZATION_TOLERANCE {
            return Err(MassRatioError::NotNormalized { sum });
        }
        Ok(Self { u1, u2 })
    }

    /// Creates a system from the mass ratio `mu = m2 / (m1 + m2)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `mu` is non-finite or outside `(0, 1)`.
    pub fn from_mass_ratio(mu: f64) -> Result<Self, MassRatioError> {
        check_mass("mu", mu)?;
        Self::new(1.0 - mu, mu)
    }

    /// The Earth–Moon system with `u1 = 0.98785`.
    #[must_use]
    pub fn earth_moon() -> Self {
        Self {
            u1: EARTH_MOON_U1,
            u2: 1.0 - EARTH_MOON_U1,
        }
    }

    /// Normalized mass of the larger primary.
    #[must_use]
    pub fn u1(&self) -> f64 {
        self.u1
    }

    /// Normalized mass of the smaller primary.
    #[must_use]
    pub fn u2(&self) -> f64 {
        self.u2
    }

    /// Returns the mass and axis position of a primary.
    #[must_use]
    pub fn primary(&self, primary: Primary) -> (f64, f64) {
        match primary {
            Primary::Larger => (self.u1, -self.u2),
            Primary::Smaller => (self.u2, self.u1),
        }
    }

    /// Returns the collinear equilibrium equation for this system.
    #[must_use]
    pub fn equation(&self) -> CollinearEquation {
        CollinearEquation::new(*self)
    }
}

fn check_mass(name: &'static str, value: f64) -> Result<(), MassRatioError> {
    if !value.is_finite() {
        return Err(MassRatioError::NonFinite { name, value });
    }
    if value <= 0.0 || value >= 1.0 {
        return Err(MassRatioError::OutOfRange { name, value });
    }
    Ok(())
}

/// One of the two massive bodies of a CR3BP system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primary {
    /// The more massive body, located at `-u2`.
    Larger,
    /// The less massive body, located at `u1`.
    Smaller,
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primary::Larger => f.write_str("larger"),
            Primary::Smaller => f.write_str("smaller"),
        }
    }
}

/// The equation was evaluated on top of a primary.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("singular at x = {x}: coincides with the {primary} primary")]
pub struct SingularityError {
    pub x: f64,
    pub primary: Primary,
}

/// Errors returned when evaluating a [`CollinearEquation`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ResidualError {
    #[error(transparent)]
    Singularity(#[from] SingularityError),

    #[error("non-finite input x = {x}")]
    NonFiniteInput { x: f64 },
}

/// The collinear equilibrium residual of a [`Cr3bp`] system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollinearEquation {
    system: Cr3bp,
}

impl CollinearEquation {
    /// Creates the equation for a system.
    #[must_use]
    pub fn new(system: Cr3bp) -> Self {
        Self { system }
    }

    /// Returns the underlying system.
    #[must_use]
    pub fn system(&self) -> Cr3bp {
        self.system
    }

    /// Signed inverse-square pull of one primary at `x`.
    fn attraction(&self, x: f64, primary: Primary) -> Result<f64, SingularityError> {
        let (mass, position) = self.system.primary(primary);
        let offset = x - position;
        let term = mass * offset / offset.abs().powf(3.0);

        if term.is_finite() {
            Ok(term)
        } else {
            Err(SingularityError { x, primary })
        }
    }
}

impl ScalarEquation for CollinearEquation {
    type Error = ResidualError;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        if !x.is_finite() {
            return Err(ResidualError::NonFiniteInput { x });
        }

        let larger = self.attraction(x, Primary::Larger)?;
        let smaller = self.attraction(x, Primary::Smaller)?;

        Ok(x - larger - smaller)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Cr3bpParams {
    u1: f64,
    u2: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<Cr3bpParams> for Cr3bp {
    type Error = MassRatioError;

    fn try_from(params: Cr3bpParams) -> Result<Self, Self::Error> {
        Cr3bp::new(params.u1, params.u2)
    }
}

#[cfg(feature = "serde")]
impl From<Cr3bp> for Cr3bpParams {
    fn from(system: Cr3bp) -> Self {
        Self {
            u1: system.u1,
            u2: system.u2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn earth_moon_parameters() {
        let system = Cr3bp::earth_moon();
        assert_relative_eq!(system.u1(), 0.98785);
        assert_relative_eq!(system.u2(), 0.01215, epsilon = 1e-15);
        assert_relative_eq!(system.u1() + system.u2(), 1.0);
    }

    #[test]
    fn from_mass_ratio_splits_masses() {
        let system = Cr3bp::from_mass_ratio(9.537e-4).expect("valid ratio");
        assert_relative_eq!(system.u1(), 1.0 - 9.537e-4);
        assert_relative_eq!(system.u2(), 9.537e-4);
    }

    #[test]
    fn rejects_bad_mass_parameters() {
        assert!(matches!(
            Cr3bp::new(f64::NAN, 0.1),
            Err(MassRatioError::NonFinite { name: "u1", .. })
        ));
        assert!(matches!(
            Cr3bp::new(0.9, 0.0),
            Err(MassRatioError::OutOfRange { name: "u2", .. })
        ));
        assert!(matches!(
            Cr3bp::from_mass_ratio(1.5),
            Err(MassRatioError::OutOfRange { name: "mu", .. })
        ));
    }

    #[test]
    fn rejects_masses_that_do_not_sum_to_one() {
        assert!(matches!(
            Cr3bp::new(0.9, 0.9),
            Err(MassRatioError::NotNormalized { .. })
        ));
        assert!(Cr3bp::new(0.98785, 1.0 - 0.98785).is_ok());
    }

    #[test]
    fn equation_wraps_its_system() {
        let system = Cr3bp::earth_moon();
        let equation = CollinearEquation::new(system);

        assert_eq!(equation.system(), system);
        assert_eq!(equation, system.equation());
    }

    #[test]
    fn residual_uses_real_power() {
        // Bit-exact against abs(x + u2) ** 3 evaluated with `pow`.
        let f = Cr3bp::earth_moon().equation();
        let x: f64 = -1.005_063_406_445_432_5;

        let (u1, u2): (f64, f64) = (0.98785, 1.0 - 0.98785);
        let expected = x - u1 * (x + u2) / (x + u2).abs().powf(3.0)
            - u2 * (x - u1) / (x - u1).abs().powf(3.0);

        assert_eq!(f.residual(x), Ok(expected));
    }

    #[test]
    fn primaries_sit_at_expected_positions() {
        let system = Cr3bp::earth_moon();
        let (_, larger) = system.primary(Primary::Larger);
        let (_, smaller) = system.primary(Primary::Smaller);
        assert_relative_eq!(larger, -system.u2());
        assert_relative_eq!(smaller, system.u1());
    }

    #[test]
    fn earth_moon_residual_values() {
        let f = Cr3bp::earth_moon().equation();

        assert_relative_eq!(
            f.residual(0.5).expect("regular point"),
            -3.215_090_716_834_731_6,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            f.residual(-0.5).expect("regular point"),
            3.656_160_269_696_991_7,
            epsilon = 1e-12
        );
    }

    #[test]
    fn residual_changes_sign_around_libration_points() {
        let f = Cr3bp::earth_moon().equation();

        // L3, L1 and L2 for the Earth–Moon system.
        for (left, right) in [(-1.1, -0.9), (0.75, 0.95), (1.05, 1.25)] {
            let fl = f.residual(left).expect("regular point");
            let fr = f.residual(right).expect("regular point");
            assert!(fl * fr < 0.0, "no sign change on [{left}, {right}]");
        }
    }

    #[test]
    fn residual_is_odd_for_equal_masses() {
        let f = Cr3bp::new(0.5, 0.5).expect("valid system").equation();

        for x in [0.1, 0.3, 0.75, 1.2, 3.0] {
            let right = f.residual(x).expect("regular point");
            let left = f.residual(-x).expect("regular point");
            assert_relative_eq!(left, -right, epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_at_smaller_primary() {
        let system = Cr3bp::earth_moon();
        let err = system.equation().residual(system.u1());

        assert_eq!(
            err,
            Err(ResidualError::Singularity(SingularityError {
                x: system.u1(),
                primary: Primary::Smaller,
            }))
        );
    }

    #[test]
    fn singular_at_larger_primary() {
        let system = Cr3bp::earth_moon();
        let err = system.equation().residual(-system.u2());

        assert!(matches!(
            err,
            Err(ResidualError::Singularity(SingularityError {
                primary: Primary::Larger,
                ..
            }))
        ));
    }

    #[test]
    fn rejects_non_finite_input() {
        let f = Cr3bp::earth_moon().equation();
        assert!(matches!(
            f.residual(f64::INFINITY),
            Err(ResidualError::NonFiniteInput { .. })
        ));
    }

    #[test]
    fn singularity_message_names_primary() {
        let err = SingularityError {
            x: 0.98785,
            primary: Primary::Smaller,
        };
        assert_eq!(
            err.to_string(),
            "singular at x = 0.98785: coincides with the smaller primary"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_and_validation() {
        let system = Cr3bp::earth_moon();

        let json = serde_json::to_string(&system).expect("serializes");
        let back: Cr3bp = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, system);

        let err = serde_json::from_str::<Cr3bp>(r#"{"u1": 1.5, "u2": 0.1}"#)
            .expect_err("u1 is out of range");
        assert!(
            err.to_string()
                .contains("mass parameter u1 must lie in (0, 1), got 1.5"),
            "unexpected error: {err}"
        );
    }
}
