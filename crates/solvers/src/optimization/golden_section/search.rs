use unconstrained_core::{Goal, Model, Observer, OptimizationProblem};

use crate::optimization::evaluate::evaluate;

use super::{
    Action, Config, Error, Event, Solution, bracket::GoldenBracket, solution::Status, state::State,
};

/// Runs golden section search toward the given [`Goal`].
///
/// This is the entry point behind [`minimize`](super::minimize) and
/// [`maximize`](super::maximize), for callers that choose the direction at
/// runtime.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] before any evaluation if the bracket is
/// malformed, or an error if the model or problem fails during evaluation.
pub fn optimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    goal: Goal,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bracket = GoldenBracket::new(bracket)?;

    let at_x = evaluate(model, problem, [bracket.x])?;
    let at_y = evaluate(model, problem, [bracket.y])?;
    let mut state = State::new(bracket, goal, at_x, at_y);

    if let Some(Action::StopEarly) = observer.observe(&state.event(0)) {
        return finish(model, problem, &state, Status::StoppedByObserver, 0);
    }

    let mut iters = 0;
    while !state.is_converged(config) && iters < config.max_iters() {
        let direction = state.next_action();
        let eval = evaluate(model, problem, [direction.probe()])?;
        state.apply(direction, eval);
        iters += 1;

        if let Some(Action::StopEarly) = observer.observe(&state.event(iters)) {
            return finish(model, problem, &state, Status::StoppedByObserver, iters);
        }
    }

    let status = if state.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    finish(model, problem, &state, status, iters)
}

/// Evaluates the caller's objective at the bracket midpoint and builds the solution.
fn finish<M, P>(
    model: &M,
    problem: &P,
    state: &State<M::Input, M::Output>,
    status: Status,
    iters: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    let at_mid = evaluate(model, problem, [state.midpoint()])?;
    let bracket = state.bounds();

    log::debug!(
        "golden section search {status:?} after {iters} iterations: x = {}, bracket = {bracket:?}",
        at_mid.x[0]
    );

    Ok(Solution {
        status,
        x: at_mid.x[0],
        objective: at_mid.objective,
        bracket,
        iters,
        evaluations: state.evaluations(),
        snapshot: at_mid.snapshot,
    })
}
