//! Solvers for scalar equations (finding `x` such that `f(x) = 0`).
//!
//! A [`ScalarEquation`] evaluates the residual at a point. Solvers in this
//! module drive that residual toward zero inside a caller-supplied bracket.
//!
//! # Solvers
//!
//! - [`improved_regula_falsi`]: false position with a residual-ratio
//!   weighting step that keeps both endpoints moving
//!
//! [`ScalarEquation`]: libration_core::ScalarEquation

pub mod improved_regula_falsi;
