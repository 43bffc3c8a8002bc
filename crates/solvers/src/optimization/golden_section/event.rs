use unconstrained_core::Snapshot;

use super::Point;

/// The bracket state reported with every event.
///
/// `a < y.x < x.x < b` always holds. Probe objectives are in the caller's
/// sign, even when maximizing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bracket {
    /// Lower bound.
    pub a: f64,

    /// Upper bound.
    pub b: f64,

    /// Right probe, at `a + r (b − a)`.
    pub x: Point,

    /// Left probe, at `a + r² (b − a)`.
    pub y: Point,
}

impl Bracket {
    /// Returns `b − a`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Returns the center of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }
}

/// Event emitted by the golden section solver.
///
/// Iteration 0 is emitted once both initial probes are evaluated.
/// Iterations `1..` are emitted after each shrink step.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// The iteration number (0 after initialization).
    pub iter: usize,

    /// Bracket and cached probe values after this iteration.
    pub bracket: Bracket,

    /// The probe evaluated most recently, in the caller's sign.
    pub point: Point,

    /// Model input and output at [`point`](Self::point).
    pub snapshot: &'a Snapshot<I, O>,
}
