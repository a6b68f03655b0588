use std::error::Error as StdError;

use thiserror::Error;

use super::{BracketError, ConvergenceTrace};

/// Errors that can occur during an improved regula falsi solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("equation error: {0}")]
    Equation(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("no convergence after {iters} iterations: residual {residual} at x = {x}")]
    NonConvergence {
        iters: usize,
        x: f64,
        residual: f64,
        trace: ConvergenceTrace,
    },
}

impl Error {
    pub(crate) fn equation<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Equation(Box::new(err))
    }

    /// Returns the partial trace of a solve that ran out of iterations.
    #[must_use]
    pub fn trace(&self) -> Option<&ConvergenceTrace> {
        match self {
            Self::NonConvergence { trace, .. } => Some(trace),
            _ => None,
        }
    }
}
