/// The optimization direction.
///
/// Solvers always minimize internally. [`Goal::transform`] maps a caller
/// objective to the internal score, so maximization is minimization of the
/// negated objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Goal {
    /// Minimize the objective.
    Minimize,

    /// Maximize the objective.
    #[default]
    Maximize,
}

impl Goal {
    /// Transforms an objective value into the internal score.
    ///
    /// - [`Goal::Minimize`]: returns the value unchanged
    /// - [`Goal::Maximize`]: negates the value
    #[inline]
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Self::Minimize => value,
            Self::Maximize => -value,
        }
    }

    /// Returns `true` for [`Goal::Maximize`].
    #[must_use]
    pub fn is_maximize(self) -> bool {
        matches!(self, Self::Maximize)
    }
}
