//! Improved regula falsi for bracketed scalar root finding.
//!
//! # Algorithm
//!
//! Each iteration starts from endpoints `a` and `b` whose residuals have
//! strictly opposite signs and computes the classical false-position point
//!
//! ```text
//! c = (a f(b) - b f(a)) / (f(b) - f(a))
//! ```
//!
//! The sign of `f(c)` picks a [`Side`]. A weight `k` is derived from `|f(c)|`
//! and the residual at the far endpoint, and a second trial point `x` is
//! placed by a secant step that scales one endpoint residual by `k - 1`.
//! Both `c` and `x` then feed the endpoint update, so plain regula falsi's
//! stuck endpoint is avoided in most cases.
//!
//! The solve converges once `|f(x)| <= tolerance`.
//!
//! # When to Use
//!
//! - A sign-changing bracket is known
//! - Derivatives are unavailable
//! - The residual is cheap and deterministic
//!
//! # Limitations
//!
//! - **No width criterion**: only the residual magnitude is tested, so steep
//!   residuals can require many iterations
//! - **No stagnation detection**: if the false-position point collapses onto
//!   an endpoint the solve runs until `max_iters` and reports
//!   [`Error::NonConvergence`]
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the endpoint update.
//! Endpoint evaluations do not emit events. Observers can return
//! [`Action::StopEarly`] to halt with [`Status::StoppedByObserver`]; a
//! converged iteration reports [`Status::Converged`] regardless.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod iterate;
mod point;
mod side;
mod solution;
mod trace;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use side::Side;
pub use solution::{Solution, Status};
pub use trace::ConvergenceTrace;

use libration_core::{Observer, ScalarEquation};

/// Finds a root of `equation` inside `bracket`.
///
/// The bracket may be given in either order. If `|f(a)|` already meets the
/// tolerance, `a` is returned with zero iterations. The same holds for `b`
/// when it is an exact root, or when it meets the tolerance and the bracket
/// has a sign change.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, if the equation fails or
/// yields a non-finite residual, or if the tolerance is not reached within
/// `max_iters` iterations.
pub fn solve<E, Obs>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    E: ScalarEquation,
    Obs: Observer<Event, Action>,
{
    iterate::run(equation, bracket, config, observer)
}

/// Finds a root without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<E>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    E: ScalarEquation,
{
    solve(equation, bracket, config, ())
}
