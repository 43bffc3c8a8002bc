use thiserror::Error;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and non-negative")]
    Epsilon,
}

impl Default for Config {
    /// Three steps with `epsilon = 1e-5`, the classic hand-worked exercise.
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(3, 1e-5).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// `epsilon` bounds the final bracket width `b − a`. A zero `epsilon`
    /// runs all `max_iters` steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is negative or non-finite.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self { max_iters, epsilon })
    }

    /// Returns the maximum number of shrink steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the bracket width at which the search has converged.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}
