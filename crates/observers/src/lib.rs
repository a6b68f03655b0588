//! Reusable observers for the libration solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasEstimate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogProgress`]: reports each iteration through the `log` facade
//! - [`StopBelow`]: stops a solve once the residual is small enough
//!
//! [`Observer`]: libration_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod progress;
mod stop;

pub use progress::LogProgress;
pub use stop::StopBelow;
