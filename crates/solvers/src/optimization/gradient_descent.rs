//! Batch gradient descent for linear least squares.
//!
//! Fits the parameters `θ` of an affine model `ŷ = Xθ`, where the design
//! matrix `X` is the feature matrix with a prepended column of ones so that
//! `θ[0]` is the bias.
//!
//! ```text
//! J(θ)  = mean((Xθ − y)²) / 2
//! ∇J(θ) = Xᵀ(Xθ − y) / n
//! θ     ← θ − learning_rate · ∇J(θ)
//! ```
//!
//! Every iteration uses the full dataset. The gradient norm is checked before
//! the update: once `‖∇J(θ)‖ < tolerance` the solver stops without moving `θ`
//! again and logs the stopping iteration at `info` level.
//!
//! There is no divergence detection. With a learning rate that is too large
//! for the data, `θ` grows without bound and the run ends with
//! [`Status::MaxIters`] rather than an error.
//!
//! # Observer Events
//!
//! [`BatchGradientDescent::fit_observed`] emits one [`Event`] per iteration,
//! before the convergence check. Observers can return [`Action::StopEarly`].
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use unconstrained_solvers::optimization::gradient_descent::{
//!     BatchGradientDescent, Config, Status,
//! };
//!
//! let x = array![[0.0], [1.0], [2.0], [3.0], [4.0]];
//! let y = array![3.0, 5.0, 7.0, 9.0, 11.0];
//!
//! let mut bgd = BatchGradientDescent::new(&x, &y, Config::default()).unwrap();
//! let solution = bgd.fit();
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((bgd.parameters()[0] - 3.0).abs() < 1e-4);
//! assert!((bgd.parameters()[1] - 2.0).abs() < 1e-4);
//! ```

mod action;
mod config;
mod design;
mod error;
mod event;
mod least_squares;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use design::with_bias;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ndarray::{Array1, Array2, ArrayBase, Data, Dimension, Ix2};
use unconstrained_core::Observer;

/// Full-batch gradient descent on the mean squared error of a linear model.
///
/// The design matrix and target are built once in [`new`](Self::new);
/// [`fit`](Self::fit) mutates the parameters in place, and
/// [`predict`](Self::predict) applies them to new rows.
#[derive(Debug, Clone)]
pub struct BatchGradientDescent {
    design: Array2<f64>,
    target: Array1<f64>,
    parameters: Array1<f64>,
    config: Config,
}

impl BatchGradientDescent {
    /// Builds the solver from a `(samples, features)` matrix and a target.
    ///
    /// The target may have any shape; it is flattened in logical order and
    /// must hold one value per sample. Parameters start at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSamples`] for empty data, or
    /// [`Error::TargetLength`] if the target does not have one value per sample.
    pub fn new<S, T, D>(
        data: &ArrayBase<S, Ix2>,
        target: &ArrayBase<T, D>,
        config: Config,
    ) -> Result<Self, Error>
    where
        S: Data<Elem = f64>,
        T: Data<Elem = f64>,
        D: Dimension,
    {
        let samples = data.nrows();
        if samples == 0 {
            return Err(Error::NoSamples);
        }
        if target.len() != samples {
            return Err(Error::TargetLength {
                samples,
                len: target.len(),
            });
        }

        let design = with_bias(data);
        let parameters = Array1::zeros(design.ncols());

        Ok(Self {
            design,
            target: target.iter().copied().collect(),
            parameters,
            config,
        })
    }

    /// Runs gradient descent without observation.
    pub fn fit(&mut self) -> Solution {
        self.fit_observed(())
    }

    /// Runs gradient descent, reporting every iteration to `observer`.
    ///
    /// Fitting continues from the current parameters, so calling this twice
    /// resumes rather than restarts. Use [`reset`](Self::reset) to start over.
    pub fn fit_observed<Obs>(&mut self, mut observer: Obs) -> Solution
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        for iter in 0..self.config.max_iters() {
            let residuals = least_squares::residuals(&self.design, &self.target, &self.parameters);
            let gradient = least_squares::gradient(&self.design, &residuals);
            let gradient_norm = least_squares::norm(&gradient);
            let cost = least_squares::cost(&residuals);

            let event = Event {
                iter,
                cost,
                gradient_norm,
                parameters: self.parameters.view(),
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Solution {
                    status: Status::StoppedByObserver,
                    iters: iter,
                    gradient_norm,
                    cost,
                };
            }

            if gradient_norm < self.config.tolerance() {
                log::info!("Stopped early at iteration {iter}, gradient norm: {gradient_norm:.6}");
                return Solution {
                    status: Status::Converged,
                    iters: iter,
                    gradient_norm,
                    cost,
                };
            }

            self.parameters
                .scaled_add(-self.config.learning_rate(), &gradient);
        }

        let residuals = least_squares::residuals(&self.design, &self.target, &self.parameters);
        let gradient_norm = least_squares::norm(&least_squares::gradient(&self.design, &residuals));
        log::debug!(
            "gradient descent hit {} iterations, gradient norm: {gradient_norm:.6}",
            self.config.max_iters()
        );

        Solution {
            status: Status::MaxIters,
            iters: self.config.max_iters(),
            gradient_norm,
            cost: least_squares::cost(&residuals),
        }
    }

    /// Predicts targets for new `(rows, features)` data.
    ///
    /// A ones column is prepended to `new_data` before applying the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeatureCount`] if `new_data` does not have the same
    /// number of features as the training data.
    pub fn predict<S>(&self, new_data: &ArrayBase<S, Ix2>) -> Result<Array1<f64>, Error>
    where
        S: Data<Elem = f64>,
    {
        let expected = self.features();
        if new_data.ncols() != expected {
            return Err(Error::FeatureCount {
                expected,
                actual: new_data.ncols(),
            });
        }

        Ok(with_bias(new_data).dot(&self.parameters))
    }

    /// Returns the cost `J(θ)` at the current parameters.
    #[must_use]
    pub fn cost(&self) -> f64 {
        least_squares::cost(&least_squares::residuals(
            &self.design,
            &self.target,
            &self.parameters,
        ))
    }

    /// Returns the gradient `∇J(θ)` at the current parameters.
    #[must_use]
    pub fn gradient(&self) -> Array1<f64> {
        let residuals = least_squares::residuals(&self.design, &self.target, &self.parameters);
        least_squares::gradient(&self.design, &residuals)
    }

    /// Sets every parameter back to zero.
    pub fn reset(&mut self) {
        self.parameters.fill(0.0);
    }

    /// Returns the parameters; index 0 is the bias.
    #[must_use]
    pub fn parameters(&self) -> &Array1<f64> {
        &self.parameters
    }

    /// Returns the design matrix, including the ones column.
    #[must_use]
    pub fn design(&self) -> &Array2<f64> {
        &self.design
    }

    /// Returns the flattened target.
    #[must_use]
    pub fn target(&self) -> &Array1<f64> {
        &self.target
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of training samples.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.design.nrows()
    }

    /// Returns the number of features, not counting the bias column.
    #[must_use]
    pub fn features(&self) -> usize {
        self.design.ncols() - 1
    }
}
