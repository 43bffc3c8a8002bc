//! Numerical solvers for unconstrained optimization.
//!
//! - [`optimization::golden_section`]: bracketing search for the extremum of
//!   a unimodal function of one variable
//! - [`optimization::gradient_descent`]: full-batch gradient descent on the
//!   mean squared error of an affine model
//!
//! # Features
//!
//! - `serde`: derives `Serialize` for configs, solutions, and trace types.

pub mod optimization;
