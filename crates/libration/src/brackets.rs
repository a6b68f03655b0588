use libration_core::Cr3bp;

use crate::Region;

/// One search bracket per [`Region`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketSet {
    far_side: [f64; 2],
    between: [f64; 2],
    beyond: [f64; 2],
}

impl BracketSet {
    /// Creates a set from explicit brackets.
    #[must_use]
    pub fn new(far_side: [f64; 2], between: [f64; 2], beyond: [f64; 2]) -> Self {
        Self {
            far_side,
            between,
            beyond,
        }
    }

    /// Brackets derived from the primary positions.
    ///
    /// Each bracket stops `margin` short of the nearest singularity:
    ///
    /// ```text
    /// FarSide  [-2 u1,        -u2 - margin]
    /// Between  [-u2 + margin,  u1 - margin]
    /// Beyond   [ u1 + margin,  2 u1       ]
    /// ```
    ///
    /// No validation happens here. A margin that is non-positive or too wide
    /// for the system shows up as a bracket error when solving.
    #[must_use]
    pub fn analytic(system: &Cr3bp, margin: f64) -> Self {
        let (u1, u2) = (system.u1(), system.u2());
        Self {
            far_side: [-2.0 * u1, -u2 - margin],
            between: [-u2 + margin, u1 - margin],
            beyond: [u1 + margin, 2.0 * u1],
        }
    }

    /// Fixed brackets around the Earth–Moon collinear points.
    #[must_use]
    pub fn earth_moon_widened() -> Self {
        Self {
            far_side: [-1.1, -0.9],
            between: [0.75, 0.95],
            beyond: [1.05, 1.25],
        }
    }

    /// Returns the bracket for a region.
    #[must_use]
    pub fn get(&self, region: Region) -> [f64; 2] {
        match region {
            Region::FarSide => self.far_side,
            Region::Between => self.between,
            Region::Beyond => self.beyond,
        }
    }
}
