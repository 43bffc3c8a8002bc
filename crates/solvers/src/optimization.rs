//! Solvers for optimization problems, minimizing or maximizing an objective.
//!
//! # Solvers
//!
//! - [`golden_section`]: derivative-free search over a bracketed interval for
//!   unimodal functions. Works with any [`OptimizationProblem<1>`] or with a
//!   plain closure through [`golden_section::GoldenSectionSearch`].
//! - [`gradient_descent`]: full-batch steepest descent fitting the
//!   parameters of a linear model to a dataset.
//!
//! [`OptimizationProblem<1>`]: unconstrained_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod golden_section;
pub mod gradient_descent;
