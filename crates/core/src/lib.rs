//! Core traits and types for unconstrained optimization.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OptimizationProblem`]: adapts solver variables to model inputs and
//!   extracts an objective from outputs
//! - [`Goal`]: whether an objective is minimized or maximized
//! - [`ScalarFunction`]: wraps a plain `Fn(f64) -> f64` as both a model and a
//!   problem

mod function;
mod goal;
mod model;
mod observer;
mod problems;

pub use function::ScalarFunction;
pub use goal::Goal;
pub use observer::Observer;
pub use problems::OptimizationProblem;
pub use {model::Model, model::Snapshot};
