use unconstrained_core::Snapshot;

use super::Error;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// The bracket width reached `epsilon`.
    Converged,

    /// Reached the iteration limit with the bracket still wider than `epsilon`.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket, the estimate of the optimum.
    pub x: f64,

    /// Objective at `x`, in the caller's sign.
    pub objective: f64,

    /// Final bracket `[a, b]`.
    pub bracket: [f64; 2],

    /// Number of shrink steps performed.
    pub iters: usize,

    /// Number of probe evaluations: two for initialization plus one per step.
    ///
    /// The extra evaluation at `x` used to report `objective` is not counted.
    pub evaluations: usize,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,
}

impl<I, O> Solution<I, O> {
    /// Returns the width of the final bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }

    /// Returns the solution only if the search converged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonConvergence`] if the search stopped for any other
    /// reason than reaching `epsilon`.
    pub fn require_converged(self) -> Result<Self, Error> {
        match self.status {
            Status::Converged => Ok(self),
            Status::MaxIters | Status::StoppedByObserver => Err(Error::NonConvergence {
                iters: self.iters,
                width: self.width(),
            }),
        }
    }
}
