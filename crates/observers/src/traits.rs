//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across both solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasIteration`]: events that carry an iteration number
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use unconstrained_core::Observer;
//! use unconstrained_observers::traits::{CanStopEarly, HasObjective};
//! use unconstrained_solvers::optimization::gradient_descent::{
//!     BatchGradientDescent, Config, Status,
//! };
//!
//! struct GoodEnough {
//!     threshold: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.threshold).then(A::stop_early)
//!     }
//! }
//!
//! let x = array![[0.0], [1.0], [2.0], [3.0], [4.0]];
//! let y = array![3.0, 5.0, 7.0, 9.0, 11.0];
//! let mut bgd = BatchGradientDescent::new(&x, &y, Config::default()).unwrap();
//!
//! let solution = bgd.fit_observed(GoodEnough { threshold: 1e-3 });
//!
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! assert!(solution.cost < 1e-3);
//! ```

use unconstrained_solvers::optimization::{golden_section, gradient_descent};

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries an iteration number.
pub trait HasIteration {
    /// Returns the zero-based iteration this event belongs to.
    fn iteration(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- golden_section ---

/// The objective at the most recently evaluated probe, in the caller's sign.
impl<I, O> HasObjective for golden_section::Event<'_, I, O> {
    fn objective(&self) -> f64 {
        self.point.objective
    }
}

impl<I, O> HasIteration for golden_section::Event<'_, I, O> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- gradient_descent ---

/// The cost `J(θ)` before this iteration's update.
impl HasObjective for gradient_descent::Event<'_> {
    fn objective(&self) -> f64 {
        self.cost
    }
}

impl HasIteration for gradient_descent::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl CanStopEarly for gradient_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
