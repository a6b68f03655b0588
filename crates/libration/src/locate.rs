use libration_core::Cr3bp;
use libration_observers::LogProgress;
use libration_solvers::equation::improved_regula_falsi::{self, Config, Error, Solution};

use crate::{BracketSet, Region};

/// Outcome of solving every region of a [`BracketSet`].
#[derive(Debug)]
pub struct Locations {
    far_side: Result<Solution, Error>,
    between: Result<Solution, Error>,
    beyond: Result<Solution, Error>,
}

impl Locations {
    /// Returns the outcome for a region.
    #[must_use]
    pub fn get(&self, region: Region) -> &Result<Solution, Error> {
        match region {
            Region::FarSide => &self.far_side,
            Region::Between => &self.between,
            Region::Beyond => &self.beyond,
        }
    }

    /// Iterates over outcomes in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &Result<Solution, Error>)> {
        Region::ALL.into_iter().map(|region| (region, self.get(region)))
    }

    /// Returns the converged roots in axis order, or `None` if any region failed.
    #[must_use]
    pub fn roots(&self) -> Option<[f64; 3]> {
        let far_side = self.far_side.as_ref().ok()?.x;
        let between = self.between.as_ref().ok()?.x;
        let beyond = self.beyond.as_ref().ok()?.x;
        Some([far_side, between, beyond])
    }
}

/// Solves the collinear equation of `system` in each region of `brackets`.
///
/// Regions are solved one after another, each with its own [`LogProgress`]
/// observer. A failure in one region is recorded and does not stop the
/// others.
pub fn locate(system: &Cr3bp, brackets: &BracketSet, config: &Config) -> Locations {
    let equation = system.equation();

    let solve_region = |region: Region| {
        let bracket = brackets.get(region);
        let mut progress = LogProgress::new(region.point_name());

        let result = improved_regula_falsi::solve(&equation, bracket, config, &mut progress);
        match &result {
            Ok(solution) => log::info!(
                "{region}: x = {} after {} iterations (|f| = {:e}, {:?})",
                solution.x,
                solution.iters,
                solution.residual.abs(),
                solution.status,
            ),
            Err(err) => log::warn!("{region}: no root in {bracket:?}: {err}"),
        }
        result
    };

    Locations {
        far_side: solve_region(Region::FarSide),
        between: solve_region(Region::Between),
        beyond: solve_region(Region::Beyond),
    }
}
