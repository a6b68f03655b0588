use libration_core::{Observer, ScalarEquation};

use super::{
    Action, Config, ConvergenceTrace, Error, Event, Point, Side, Solution, Status,
    bracket::{Bounds, Bracket},
};

pub(super) fn run<E, Obs>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: ScalarEquation,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();
    let tol = config.tolerance();

    let a = evaluate(equation, left)?;
    if a.residual.abs() <= tol {
        return Ok(Solution::at_endpoint(a, bounds.as_array()));
    }

    // A near-zero `b` only counts once the bracket has a sign change.
    let b = evaluate(equation, right)?;
    #[allow(clippy::float_cmp)]
    if b.residual == 0.0 {
        return Ok(Solution::at_endpoint(b, bounds.as_array()));
    }

    let mut bracket = Bracket::new(a, b)?;
    if b.residual.abs() <= tol {
        return Ok(Solution::at_endpoint(b, bounds.as_array()));
    }

    let mut trace = ConvergenceTrace::with_capacity(config.max_iters().min(64));
    let mut trial = a;

    for iter in 1..=config.max_iters() {
        let c = evaluate(equation, bracket.false_position())?;
        let side = Side::select(&bracket, c);
        let weight = side.weight(&bracket, c);
        trial = evaluate(equation, side.trial_point(&bracket, weight))?;

        bracket.update(side, c, trial);
        trace.push(trial.residual);

        let event = Event {
            iter,
            side,
            weight,
            false_position: c,
            trial,
            bracket: bracket.as_points(),
        };
        let action = observer.observe(&event);

        if trial.residual.abs() <= tol {
            return Ok(finish(Status::Converged, trial, iter, trace, &bracket));
        }
        if let Some(Action::StopEarly) = action {
            return Ok(finish(Status::StoppedByObserver, trial, iter, trace, &bracket));
        }
    }

    Err(Error::NonConvergence {
        iters: config.max_iters(),
        x: trial.x,
        residual: trial.residual,
        trace,
    })
}

/// Evaluates the equation, rejecting non-finite residuals.
fn evaluate<E: ScalarEquation>(equation: &E, x: f64) -> Result<Point, Error> {
    let residual = equation.residual(x).map_err(Error::equation)?;
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(Point::new(x, residual))
}

fn finish(
    status: Status,
    trial: Point,
    iters: usize,
    trace: ConvergenceTrace,
    bracket: &Bracket,
) -> Solution {
    Solution {
        status,
        x: trial.x,
        residual: trial.residual,
        iters,
        trace,
        bracket: [bracket.a().x, bracket.b().x],
    }
}
