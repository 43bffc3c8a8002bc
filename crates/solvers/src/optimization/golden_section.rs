//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval `[a, b]`. It keeps two interior probes placed by the
//! golden number `r = (√5 − 1) / 2`:
//!
//! ```text
//! x = a + r  (b − a)      right probe
//! y = a + r² (b − a)      left probe
//! ```
//!
//! Each step compares the cached objective values at the probes, discards the
//! sub-interval that cannot contain the optimum, and reuses the surviving
//! probe. Because `r² = 1 − r`, the surviving probe lands exactly where the
//! next probe would be placed, so each step costs one new evaluation and
//! scales the bracket width by `r`.
//!
//! Maximization is minimization of the negated objective (see [`Goal`]).
//! The search stops once `b − a ≤ epsilon` or after `max_iters` steps and
//! reports the bracket midpoint together with the caller's objective there.
//!
//! # Iteration cap
//!
//! Reaching `max_iters` is not an error. The solver returns the current
//! midpoint with [`Status::MaxIters`]; call [`Solution::require_converged`]
//! to turn that into [`Error::NonConvergence`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after initialization (`iter == 0`) and one
//! after every step. Each event carries the full bracket state, which is the
//! per-iteration progress trace. Observers can return [`Action::StopEarly`]
//! to halt; the solution then reports the midpoint of the bracket at that
//! point.
//!
//! # Example
//!
//! ```rust
//! use unconstrained_solvers::optimization::golden_section::{
//!     Config, GoldenSectionSearch, Status,
//! };
//!
//! let search = GoldenSectionSearch::new(|t: f64| t.sin() * (1.0 + t.cos()), 0.0, 1.6)
//!     .unwrap()
//!     .with_config(Config::new(100, 1e-5).unwrap());
//!
//! let solution = search.fit().unwrap();
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - std::f64::consts::FRAC_PI_3).abs() < 1e-5);
//! ```

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod handle;
mod point;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::GOLDEN_NUMBER;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Bracket, Event};
pub use handle::GoldenSectionSearch;
pub use point::Point;
pub use solution::{Solution, Status};

use unconstrained_core::{Goal, Model, Observer, OptimizationProblem};

pub use search::optimize;

/// Finds the minimum of the objective using golden section search.
///
/// The observer receives an [`Event`] after initialization and after each
/// step. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] for a malformed bracket, or an error if
/// the model or problem fails during evaluation.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    optimize(model, problem, bracket, config, Goal::Minimize, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] for a malformed bracket, or an error if
/// the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}

/// Finds the maximum of the objective using golden section search.
///
/// The observer receives an [`Event`] after initialization and after each
/// step. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] for a malformed bracket, or an error if
/// the model or problem fails during evaluation.
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    optimize(model, problem, bracket, config, Goal::Maximize, observer)
}

/// Finds the maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] for a malformed bracket, or an error if
/// the model or problem fails during evaluation.
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, bracket, config, ())
}
