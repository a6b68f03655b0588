//! Collinear libration points of the circular restricted three-body problem.
//!
//! A [`Cr3bp`] system has three collinear equilibria, one in each [`Region`]
//! of the axis through the primaries. [`locate`] solves the collinear
//! equation in each region of a [`BracketSet`] with the improved regula falsi
//! solver and reports every outcome independently.
//!
//! ```
//! use libration::{BracketSet, Cr3bp, Region, locate};
//! use libration::improved_regula_falsi::Config;
//!
//! let system = Cr3bp::earth_moon();
//! let locations = locate(&system, &BracketSet::earth_moon_widened(), &Config::default());
//!
//! let l1 = locations.get(Region::Between).as_ref().expect("L1 converges");
//! assert!((l1.x - 0.836_918).abs() < 1e-5);
//! ```

mod brackets;
mod locate;
mod region;

pub use brackets::BracketSet;
pub use locate::{Locations, locate};
pub use region::Region;

pub use libration_core::{
    CollinearEquation, Cr3bp, FnEquation, MassRatioError, Primary, ResidualError, ScalarEquation,
    SingularityError,
};
pub use libration_solvers::equation::improved_regula_falsi;
