//! Numerical solvers for the libration workspace.
//!
//! Solvers are generic over [`ScalarEquation`] and report their progress to an
//! [`Observer`], so the same code path serves tests, logging, and the
//! libration-point driver.
//!
//! [`ScalarEquation`]: libration_core::ScalarEquation
//! [`Observer`]: libration_core::Observer

pub mod equation;
