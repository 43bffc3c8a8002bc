//! Reusable observers for the unconstrained optimizers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both solvers in `unconstrained-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasIteration`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] writes one `log` record per solver iteration.
//! - [`History`] records `(iteration, objective)` pairs for later inspection.
//!
//! [`Observer`]: unconstrained_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

mod history;
mod logging;
pub mod traits;

pub use history::History;
pub use logging::LogObserver;
