use unconstrained_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// An observer that records the objective reported at every iteration.
///
/// Works with any event implementing [`HasIteration`] and [`HasObjective`],
/// which covers both solvers. Pass `&mut History` to keep the recording
/// after the solver returns.
///
/// # Example
///
/// ```rust
/// use ndarray::array;
/// use unconstrained_observers::History;
/// use unconstrained_solvers::optimization::gradient_descent::{BatchGradientDescent, Config};
///
/// let x = array![[0.0], [1.0], [2.0]];
/// let y = array![1.0, 3.0, 5.0];
/// let mut bgd = BatchGradientDescent::new(&x, &y, Config::new(0.1, 1e-6, 20).unwrap()).unwrap();
///
/// let mut history = History::new();
/// bgd.fit_observed(&mut history);
///
/// assert_eq!(history.len(), 20);
/// assert_eq!(history.entries()[0].0, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<(usize, f64)>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an `(iteration, objective)` pair.
    pub fn record(&mut self, iteration: usize, objective: f64) {
        self.entries.push((iteration, objective));
    }

    /// Returns every recorded pair in arrival order.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Returns the recorded objectives in arrival order.
    pub fn objectives(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, objective)| objective)
    }

    /// Returns the most recent pair, if any.
    #[must_use]
    pub fn last(&self) -> Option<(usize, f64)> {
        self.entries.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every recorded pair.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.iteration(), event.objective());
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the recording can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasIteration + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
