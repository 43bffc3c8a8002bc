use std::{cell::Cell, convert::Infallible, f64::consts::FRAC_PI_2, f64::consts::FRAC_PI_3};

use approx::assert_relative_eq;
use thiserror::Error;

use unconstrained_core::{Goal, Model, OptimizationProblem, ScalarFunction};

use super::{
    Action, Bracket, Config, Error, Event, GOLDEN_NUMBER, GoldenSectionSearch, Status,
    maximize_unobserved, minimize, minimize_unobserved, optimize,
};

/// f(θ) = sin θ (1 + cos θ), maximal at θ = π/3.
fn bent_sine(theta: f64) -> f64 {
    theta.sin() * (1.0 + theta.cos())
}

/// f(θ) = 4 (1 + cos θ) sin θ, the hand-worked exercise.
fn angle_objective(theta: f64) -> f64 {
    4.0 * theta.sin() * (1.0 + theta.cos())
}

fn converging() -> Config {
    Config::new(100, 1e-5).unwrap()
}

#[test]
fn maximizes_bent_sine_at_sixty_degrees() {
    let search = GoldenSectionSearch::new(bent_sine, 0.0, FRAC_PI_2)
        .unwrap()
        .with_config(converging());

    let solution = search.fit().expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.width() <= 1e-5);
    assert_relative_eq!(solution.x, FRAC_PI_3, epsilon = 1e-5);
    assert_relative_eq!(solution.objective, 0.75 * 3.0_f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(solution.objective, 1.299_038, epsilon = 1e-6);
}

#[test]
fn default_run_reproduces_three_step_trace() {
    // Hand calculation for 4 (1 + cos θ) sin θ on [0, π/2], reported as
    // (a, b) after each of the three steps.
    let expected = [
        (0.0, FRAC_PI_2),
        (0.599_990_807_432_163_4, FRAC_PI_2),
        (0.599_990_807_432_163_4, 1.199_981_614_864_326_8),
        (0.829_166_902_933_756_8, 1.199_981_614_864_326_8),
    ];

    let search = GoldenSectionSearch::new(angle_objective, 0.0, FRAC_PI_2).unwrap();

    let mut trace: Vec<Bracket> = Vec::new();
    let solution = search
        .fit_observed(|event: &Event<'_, f64, f64>| {
            assert_eq!(event.iter, trace.len());
            trace.push(event.bracket);
            None
        })
        .expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    assert_eq!(trace.len(), expected.len());

    for (bracket, (a, b)) in trace.iter().zip(expected) {
        assert_relative_eq!(bracket.a, a, epsilon = 1e-12);
        assert_relative_eq!(bracket.b, b, epsilon = 1e-12);
    }

    // Initial probes and cached values, in the caller's sign.
    assert_relative_eq!(trace[0].x.x, 0.970_805_519_362_733_3, epsilon = 1e-12);
    assert_relative_eq!(trace[0].y.x, 0.599_990_807_432_163_4, epsilon = 1e-12);
    assert_relative_eq!(trace[0].x.objective, 5.165_428_069_182_641, epsilon = 1e-9);
    assert_relative_eq!(trace[0].y.objective, 4.122_604_393_296_656, epsilon = 1e-9);

    // Final probes after step 3.
    assert_relative_eq!(trace[3].x.x, 1.058_342_998_435_350_3, epsilon = 1e-12);
    assert_relative_eq!(trace[3].y.x, 0.970_805_519_362_733_3, epsilon = 1e-12);

    assert_relative_eq!(solution.x, 1.014_574_258_899_041_8, epsilon = 1e-12);
    assert_relative_eq!(solution.objective, 5.190_589_025_923_36, epsilon = 1e-9);
}

#[test]
fn bracket_shrinks_by_golden_number_each_step() {
    let search = GoldenSectionSearch::new(bent_sine, 0.0, FRAC_PI_2)
        .unwrap()
        .with_config(converging());

    let mut widths = Vec::new();
    search
        .fit_observed(|event: &Event<'_, f64, f64>| {
            widths.push(event.bracket.width());
            None
        })
        .unwrap();

    assert!(widths.len() > 20);
    for pair in widths.windows(2) {
        assert!(pair[1] <= pair[0]);
        assert_relative_eq!(pair[1] / pair[0], GOLDEN_NUMBER, epsilon = 1e-6);
    }
}

#[test]
fn probes_stay_strictly_inside_bracket() {
    let search = GoldenSectionSearch::new(|x: f64| (x - 0.3).abs(), -4.0, 9.0)
        .unwrap()
        .with_goal(Goal::Minimize)
        .with_config(Config::new(40, 1e-9).unwrap());

    let mut checked = 0;
    search
        .fit_observed(|event: &Event<'_, f64, f64>| {
            let Bracket { a, b, x, y } = event.bracket;
            assert!(a < y.x && y.x < x.x && x.x < b, "bad ordering in {:?}", event.bracket);
            checked += 1;
            None
        })
        .unwrap();

    assert_eq!(checked, 41);
}

#[test]
fn one_evaluation_per_step() {
    let calls = Cell::new(0_usize);
    let counted = |x: f64| {
        calls.set(calls.get() + 1);
        bent_sine(x)
    };

    let search = GoldenSectionSearch::new(counted, 0.0, FRAC_PI_2)
        .unwrap()
        .with_config(converging());

    let solution = search.fit().unwrap();

    assert_eq!(solution.evaluations, 2 + solution.iters);
    // One extra evaluation reports the objective at the midpoint.
    assert_eq!(calls.get(), solution.evaluations + 1);
}

#[test]
fn event_snapshot_is_latest_probe() {
    let search = GoldenSectionSearch::new(bent_sine, 0.0, FRAC_PI_2)
        .unwrap()
        .with_config(Config::new(5, 0.0).unwrap());

    search
        .fit_observed(|event: &Event<'_, f64, f64>| {
            let evaluated = event.snapshot.input;
            let Bracket { x, y, .. } = event.bracket;
            assert!(evaluated == x.x || evaluated == y.x);
            assert_eq!(event.point.x, evaluated);
            assert_relative_eq!(event.snapshot.output, bent_sine(evaluated));
            assert_relative_eq!(event.point.objective, event.snapshot.output);
            None
        })
        .unwrap();
}

#[test]
fn minimizes_shifted_parabola() {
    let f = ScalarFunction::new(|x: f64| (x - 2.0).powi(2) + 1.0);

    let solution =
        minimize_unobserved(&f, &f, [0.0, 5.0], &converging()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-5);
    assert_relative_eq!(solution.objective, 1.0, epsilon = 1e-9);
}

#[test]
fn maximize_matches_minimizing_negation() {
    let f = ScalarFunction::new(bent_sine);
    let negated = ScalarFunction::new(|x: f64| -bent_sine(x));

    let max = maximize_unobserved(&f, &f, [0.0, FRAC_PI_2], &converging()).unwrap();
    let min = minimize_unobserved(&negated, &negated, [0.0, FRAC_PI_2], &converging()).unwrap();

    assert_eq!(max.iters, min.iters);
    assert_relative_eq!(max.x, min.x);
    assert_relative_eq!(max.objective, -min.objective);
}

#[test]
fn zero_epsilon_runs_to_max_iters() {
    let f = ScalarFunction::new(|x: f64| x * x);

    let solution = optimize(
        &f,
        &f,
        [-1.0, 1.0],
        &Config::new(12, 0.0).unwrap(),
        Goal::Minimize,
        (),
    )
    .unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 12);
    assert_relative_eq!(solution.width(), 2.0 * GOLDEN_NUMBER.powi(12), epsilon = 1e-12);
}

#[test]
fn narrow_bracket_converges_without_steps() {
    let f = ScalarFunction::new(|x: f64| x);

    let solution = minimize_unobserved(&f, &f, [1.0, 1.0 + 1e-6], &converging()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evaluations, 2);
}

#[test]
fn require_converged_rejects_capped_run() {
    let search = GoldenSectionSearch::new(bent_sine, 0.0, FRAC_PI_2).unwrap();

    let capped = search.fit().unwrap();
    let err = capped.require_converged().unwrap_err();

    assert!(matches!(err, Error::NonConvergence { iters: 3, .. }));

    let converged = search.with_config(converging()).fit().unwrap();
    assert!(converged.require_converged().is_ok());
}

#[test]
fn invalid_interval_is_rejected_before_evaluating() {
    let calls = Cell::new(0_usize);
    let counted = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };

    let reversed = GoldenSectionSearch::new(counted, 2.0, 1.0);
    assert!(matches!(reversed, Err(Error::InvalidInterval { a, b }) if a == 2.0 && b == 1.0));

    let f = ScalarFunction::new(counted);
    let empty = minimize_unobserved(&f, &f, [3.0, 3.0], &converging());
    assert!(matches!(empty, Err(Error::InvalidInterval { .. })));

    assert_eq!(calls.get(), 0);
}

#[test]
fn observer_can_stop_early() {
    let f = ScalarFunction::new(bent_sine);

    let mut events = 0;
    let observer = |_event: &Event<'_, f64, f64>| {
        events += 1;
        if events >= 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = minimize(&f, &f, [0.0, 3.0], &converging(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    // One event after init, then two steps.
    assert_eq!(solution.iters, 2);
    assert_eq!(events, 3);
    assert_relative_eq!(solution.x, 0.5 * (solution.bracket[0] + solution.bracket[1]));
}

#[test]
fn observer_can_stop_after_initialization() {
    let f = ScalarFunction::new(bent_sine);

    let solution = minimize(
        &f,
        &f,
        [0.0, 3.0],
        &converging(),
        |_: &Event<'_, f64, f64>| Some(Action::StopEarly),
    )
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.bracket, [0.0, 3.0]);
}

// --- Fallible models ---

/// Model that fails when x exceeds a threshold.
struct ThresholdModel {
    threshold: f64,
}

#[derive(Debug, Clone, Error)]
#[error("model failed at x={x} (threshold={threshold})")]
struct ThresholdError {
    x: f64,
    threshold: f64,
}

impl Model for ThresholdModel {
    type Input = f64;
    type Output = f64;
    type Error = ThresholdError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > self.threshold {
            Err(ThresholdError {
                x: *x,
                threshold: self.threshold,
            })
        } else {
            Ok((x - 2.0).powi(2))
        }
    }
}

/// Objective: the model output.
struct ObjectiveOutput;

impl OptimizationProblem<1> for ObjectiveOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn model_failure_propagates() {
    // Right probe of [0, 10] is at ~6.18 and fails.
    let model = ThresholdModel { threshold: 5.0 };

    let result = minimize_unobserved(&model, &ObjectiveOutput, [0.0, 10.0], &converging());

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn model_inside_safe_region_converges() {
    let model = ThresholdModel { threshold: 5.0 };

    let solution =
        minimize_unobserved(&model, &ObjectiveOutput, [0.0, 4.5], &converging()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-5);
    assert_relative_eq!(solution.snapshot.input, solution.x);
}
