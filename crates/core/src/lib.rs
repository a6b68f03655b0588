//! Core traits and types for the libration workspace.
//!
//! This crate defines the shared abstractions the solver and observers build
//! on, plus the equation they were built for:
//!
//! - [`ScalarEquation`]: a fallible residual `f(x)` a bracketing solver can drive
//! - [`FnEquation`]: adapts a plain closure into a [`ScalarEquation`]
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Cr3bp`], [`CollinearEquation`]: the collinear equilibrium condition of
//!   the circular restricted three-body problem

pub mod cr3bp;

mod equation;
mod observer;

pub use cr3bp::{
    CollinearEquation, Cr3bp, MassRatioError, Primary, ResidualError, SingularityError,
};
pub use equation::{FnEquation, ScalarEquation};
pub use observer::Observer;
