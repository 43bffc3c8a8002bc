use super::Error;

/// Indicates how gradient descent terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// The gradient norm dropped below the tolerance.
    Converged,

    /// Performed `max_iters` updates without converging.
    MaxIters,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Summary of a gradient descent run.
///
/// The fitted parameters stay on the solver; see
/// [`BatchGradientDescent::parameters`](super::BatchGradientDescent::parameters).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Number of parameter updates applied.
    pub iters: usize,

    /// Gradient norm at the final parameters.
    pub gradient_norm: f64,

    /// Cost at the final parameters.
    pub cost: f64,
}

impl Solution {
    /// Returns the solution only if the gradient norm reached the tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonConvergence`] for any other status.
    pub fn require_converged(self) -> Result<Self, Error> {
        match self.status {
            Status::Converged => Ok(self),
            Status::MaxIters | Status::StoppedByObserver => Err(Error::NonConvergence {
                iters: self.iters,
                gradient_norm: self.gradient_norm,
            }),
        }
    }
}
