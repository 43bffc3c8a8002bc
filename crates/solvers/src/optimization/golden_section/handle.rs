use unconstrained_core::{Goal, Observer, ScalarFunction};

use super::{Action, Config, Error, Event, Solution, bracket, optimize};

/// Golden section search over a plain closure.
///
/// Bundles the objective, the bracket, the [`Config`], and the [`Goal`].
/// Defaults follow the classic exercise: maximize, `epsilon = 1e-5`, and at
/// most three steps (see [`Config::default`]). The bracket is validated on
/// construction and every [`fit`](Self::fit) starts from it again.
#[derive(Debug, Clone)]
pub struct GoldenSectionSearch<F> {
    function: ScalarFunction<F>,
    bracket: [f64; 2],
    config: Config,
    goal: Goal,
}

impl<F> GoldenSectionSearch<F>
where
    F: Fn(f64) -> f64,
{
    /// Creates a search for the optimum of `objective` on `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] unless both bounds are finite and `a < b`.
    pub fn new(objective: F, a: f64, b: f64) -> Result<Self, Error> {
        let bracket = bracket::validate([a, b])?;
        Ok(Self {
            function: ScalarFunction::new(objective),
            bracket,
            config: Config::default(),
            goal: Goal::default(),
        })
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets whether the objective is minimized or maximized.
    #[must_use]
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    /// Returns the initial bracket `[a, b]`.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        self.bracket
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the optimization direction.
    #[must_use]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Runs the search silently.
    ///
    /// # Errors
    ///
    /// The closure cannot fail and the bracket was checked in
    /// [`new`](Self::new), so this only errors if that invariant is broken.
    pub fn fit(&self) -> Result<Solution<f64, f64>, Error> {
        self.fit_observed(())
    }

    /// Runs the search, reporting every iteration to `observer`.
    ///
    /// # Errors
    ///
    /// See [`fit`](Self::fit).
    pub fn fit_observed<Obs>(&self, observer: Obs) -> Result<Solution<f64, f64>, Error>
    where
        Obs: for<'a> Observer<Event<'a, f64, f64>, Action>,
    {
        optimize(
            &self.function,
            &self.function,
            self.bracket,
            &self.config,
            self.goal,
            observer,
        )
    }
}
