use log::Level;

use libration_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// Logs one line per solver iteration.
///
/// Each line is prefixed with a label so that several solves can share a log.
/// The observer never acts on the solve.
///
/// ```
/// use libration_core::FnEquation;
/// use libration_observers::LogProgress;
/// use libration_solvers::equation::improved_regula_falsi::{Config, solve};
///
/// let f = FnEquation::new(|x: f64| x * x - 2.0);
/// let mut progress = LogProgress::new("sqrt2");
/// let solution = solve(&f, [0.0, 2.0], &Config::default(), &mut progress).unwrap();
/// assert_eq!(progress.iters(), solution.iters);
/// ```
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: String,
    level: Level,
    iters: usize,
}

impl LogProgress {
    /// Creates an observer that logs at `Level::Debug`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: Level::Debug,
            iters: 0,
        }
    }

    /// Logs at a different level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the label used as the log prefix.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of events seen.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iters
    }
}

impl<E, A> Observer<E, A> for LogProgress
where
    E: HasResidual + HasEstimate,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.iters += 1;
        log::log!(
            self.level,
            "{}: iteration {}: |f| = {:e} at x = {}",
            self.label,
            self.iters,
            event.residual().abs(),
            event.estimate(),
        );
        None
    }
}

impl<E, A> Observer<E, A> for &mut LogProgress
where
    E: HasResidual + HasEstimate,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
