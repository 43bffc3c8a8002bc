use unconstrained_core::{Goal, Snapshot};

use crate::optimization::evaluate::Evaluation;

use super::bracket::GoldenBracket;
use super::{Bracket, Config, Event, Point};

/// Which side to discard and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum ShrinkDirection {
    /// Discard `[a, y)`; payload is the new `x`.
    ShrinkLeft(f64),

    /// Discard `(x, b]`; payload is the new `y`.
    ShrinkRight(f64),
}

impl ShrinkDirection {
    /// Returns where the new probe goes.
    pub(super) fn probe(self) -> f64 {
        match self {
            Self::ShrinkLeft(x) | Self::ShrinkRight(x) => x,
        }
    }
}

/// Bracket plus cached probe objectives.
pub(super) struct State<I, O> {
    bracket: GoldenBracket,
    goal: Goal,
    f_x: f64,
    f_y: f64,
    last: Point,
    latest: Snapshot<I, O>,
    evaluations: usize,
}

impl<I, O> State<I, O> {
    /// Builds the initial state from evaluations at both probes.
    pub(super) fn new(
        bracket: GoldenBracket,
        goal: Goal,
        at_x: Evaluation<I, O, 1>,
        at_y: Evaluation<I, O, 1>,
    ) -> Self {
        let last = Point::from(&at_y);
        Self {
            bracket,
            goal,
            f_x: at_x.objective,
            f_y: at_y.objective,
            last,
            latest: at_y.snapshot,
            evaluations: 2,
        }
    }

    /// Pure query: which side to discard and where to evaluate next.
    ///
    /// Scores are compared after the goal transform, so the internal
    /// objective is always minimized.
    pub(super) fn next_action(&self) -> ShrinkDirection {
        let x_score = self.goal.transform(self.f_x);
        let y_score = self.goal.transform(self.f_y);

        if x_score < y_score {
            // Right probe is better, the optimum is not in [a, y).
            ShrinkDirection::ShrinkLeft(self.bracket.next_x())
        } else {
            // Left probe is at least as good, the optimum is not in (x, b].
            ShrinkDirection::ShrinkRight(self.bracket.next_y())
        }
    }

    /// Applies the shrink and caches the new probe evaluation.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, eval: Evaluation<I, O, 1>) {
        match direction {
            ShrinkDirection::ShrinkLeft(_) => {
                self.bracket.shrink_left();
                self.f_y = self.f_x;
                self.f_x = eval.objective;
            }
            ShrinkDirection::ShrinkRight(_) => {
                self.bracket.shrink_right();
                self.f_x = self.f_y;
                self.f_y = eval.objective;
            }
        }
        self.last = Point::from(&eval);
        self.latest = eval.snapshot;
        self.evaluations += 1;
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.bracket.width() <= config.epsilon()
    }

    pub(super) fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub(super) fn midpoint(&self) -> f64 {
        self.bracket.midpoint()
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.bracket.a, self.bracket.b]
    }

    pub(super) fn bracket(&self) -> Bracket {
        Bracket {
            a: self.bracket.a,
            b: self.bracket.b,
            x: Point::new(self.bracket.x, self.f_x),
            y: Point::new(self.bracket.y, self.f_y),
        }
    }

    pub(super) fn event(&self, iter: usize) -> Event<'_, I, O> {
        Event {
            iter,
            bracket: self.bracket(),
            point: self.last,
            snapshot: &self.latest,
        }
    }
}
