/// Errors that can occur when building, running, or applying gradient descent.
///
/// [`TargetLength`](Error::TargetLength) and
/// [`FeatureCount`](Error::FeatureCount) are the two dimension mismatches;
/// see [`Error::is_dimension_mismatch`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("training data has no samples")]
    NoSamples,

    #[error("target has {len} values but data has {samples} samples")]
    TargetLength { samples: usize, len: usize },

    #[error("expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("gradient norm {gradient_norm:e} still above tolerance after {iters} iterations")]
    NonConvergence { iters: usize, gradient_norm: f64 },
}

impl Error {
    /// Returns `true` if the error is a shape disagreement between inputs.
    #[must_use]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::TargetLength { .. } | Self::FeatureCount { .. })
    }
}
