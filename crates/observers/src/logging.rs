//! Per-iteration progress logging through the `log` facade.

use log::Level;
use unconstrained_core::Observer;
use unconstrained_solvers::optimization::{
    golden_section::{self, Bracket},
    gradient_descent,
};

/// An observer that writes one log record per solver iteration.
///
/// Golden section search events are rendered as
/// `Iteration i: a = .., b = .., x = .., y = .., f(x) = .., f(y) = ..`,
/// gradient descent events as `Iteration i: cost = .., gradient norm = ..`.
/// The observer never steers the solver.
///
/// Records go to the `log` facade at [`Level::Info`] unless changed with
/// [`with_level`](Self::with_level). Nothing is formatted when the level is
/// disabled.
///
/// # Example
///
/// ```rust
/// use unconstrained_observers::LogObserver;
/// use unconstrained_solvers::optimization::golden_section::{Config, GoldenSectionSearch};
///
/// let search = GoldenSectionSearch::new(|t: f64| 4.0 * (1.0 + t.cos()) * t.sin(), 0.0, 1.5)
///     .unwrap()
///     .with_config(Config::new(3, 1e-5).unwrap());
///
/// let solution = search.fit_observed(LogObserver::new()).unwrap();
/// assert_eq!(solution.iters, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at [`Level::Info`].
    #[must_use]
    pub fn new() -> Self {
        Self { level: Level::Info }
    }

    /// Sets the level used for every record.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the level used for every record.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Observer<golden_section::Event<'_, I, O>, golden_section::Action> for LogObserver {
    fn observe(
        &mut self,
        event: &golden_section::Event<'_, I, O>,
    ) -> Option<golden_section::Action> {
        if log::log_enabled!(self.level) {
            log::log!(self.level, "{}", bracket_line(event.iter, &event.bracket));
        }
        None
    }
}

impl Observer<gradient_descent::Event<'_>, gradient_descent::Action> for LogObserver {
    fn observe(
        &mut self,
        event: &gradient_descent::Event<'_>,
    ) -> Option<gradient_descent::Action> {
        if log::log_enabled!(self.level) {
            log::log!(self.level, "{}", descent_line(event));
        }
        None
    }
}

fn bracket_line(iter: usize, bracket: &Bracket) -> String {
    let Bracket { a, b, x, y } = bracket;
    format!(
        "Iteration {iter}: a = {a:.6}, b = {b:.6}, x = {:.6}, y = {:.6}, \
         f(x) = {:.6}, f(y) = {:.6}",
        x.x, y.x, x.objective, y.objective
    )
}

fn descent_line(event: &gradient_descent::Event<'_>) -> String {
    format!(
        "Iteration {}: cost = {:.6}, gradient norm = {:.6}",
        event.iter, event.cost, event.gradient_norm
    )
}
