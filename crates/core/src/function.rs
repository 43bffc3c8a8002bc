use std::convert::Infallible;

use crate::{Model, OptimizationProblem};

/// Wraps a scalar function `f(x)` so it can be handed to a solver directly.
///
/// The wrapper is both the [`Model`] (input `x`, output `f(x)`) and the
/// [`OptimizationProblem<1>`] (objective is the model output), which is the
/// usual shape of a textbook objective such as `sin(θ)(1 + cos(θ))`.
///
/// # Example
///
/// ```rust
/// use unconstrained_core::{Model, OptimizationProblem, ScalarFunction};
///
/// let f = ScalarFunction::new(|x: f64| (x - 2.0).powi(2));
/// let input = f.input(&[3.0]).unwrap();
/// let output = f.call(&input).unwrap();
///
/// assert_eq!(f.objective(&input, &output).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScalarFunction<F>(F);

impl<F> ScalarFunction<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps `function`.
    pub fn new(function: F) -> Self {
        Self(function)
    }

    /// Evaluates the wrapped function.
    pub fn eval(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}

impl<F> Model for ScalarFunction<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(self.eval(*x))
    }
}

impl<F> OptimizationProblem<1> for ScalarFunction<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
