use thiserror::Error;

/// Configuration for batch gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    learning_rate: f64,
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a gradient descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("learning_rate must be finite and positive")]
    LearningRate,

    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 1e-6, 1000).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated step size and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `learning_rate` is not finite and positive, or if
    /// `tolerance` is negative or non-finite.
    pub fn new(learning_rate: f64, tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(ConfigError::LearningRate);
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            learning_rate,
            tolerance,
            max_iters,
        })
    }

    /// Returns the step size applied to the gradient.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the gradient norm below which the solver stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of parameter updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
