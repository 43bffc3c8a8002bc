//! Demonstrations of the unconstrained optimizers.
//!
//! # Usage
//!
//! ```text
//! cargo run -p unconstrained-demos -- angle
//! cargo run -p unconstrained-demos -- angle-converge
//! cargo run -p unconstrained-demos -- regression --json
//! ```
//!
//! # Modes
//!
//! - **angle**: Maximize `f(θ) = 4 (1 + cos θ) sin θ` on \[0, π/2\] with
//!   three golden section steps, printing the bracket after every iteration.
//!   This is the hand calculation; the answer is only roughly θ ≈ 1.01.
//!
//! - **angle-converge**: The same objective run until the bracket is
//!   narrower than `1e-5`. Progress goes through [`LogObserver`]; set
//!   `RUST_LOG=warn` to silence it. The maximum is at θ = π/3.
//!
//! - **regression**: Fit `y = 3 + 2x` on five samples with batch gradient
//!   descent and predict two new rows.
//!
//! Pass `--json` to also print the result as JSON.

use std::{error::Error, f64::consts::FRAC_PI_2};

use ndarray::array;
use serde_json::json;
use unconstrained_core::Goal;
use unconstrained_observers::{History, LogObserver};
use unconstrained_solvers::optimization::{
    golden_section::{self, Bracket, GoldenSectionSearch},
    gradient_descent::{self, BatchGradientDescent},
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let mode = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .map_or("angle", String::as_str);

    log::debug!("running {mode} demo");
    match mode {
        "angle" => angle(json),
        "angle-converge" => angle_converge(json),
        "regression" => regression(json),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: unconstrained-demos [angle|angle-converge|regression] [--json]");
            std::process::exit(1);
        }
    }
}

/// Cross-section area of a trough bent at angle θ from sides of length 2.
fn trough(theta: f64) -> f64 {
    4.0 * (1.0 + theta.cos()) * theta.sin()
}

fn angle(json: bool) -> Result<(), Box<dyn Error>> {
    let search = GoldenSectionSearch::new(trough, 0.0, FRAC_PI_2)?
        .with_goal(Goal::Maximize)
        .with_config(golden_section::Config::new(3, 1e-5)?);

    let solution = search.fit_observed(|event: &golden_section::Event<'_, f64, f64>| {
        print_bracket(event.iter, &event.bracket);
        None
    })?;

    report_maximum(&solution, json)
}

fn angle_converge(json: bool) -> Result<(), Box<dyn Error>> {
    let search = GoldenSectionSearch::new(trough, 0.0, FRAC_PI_2)?
        .with_goal(Goal::Maximize)
        .with_config(golden_section::Config::new(100, 1e-5)?);

    let solution = search.fit_observed(LogObserver::new())?.require_converged()?;

    report_maximum(&solution, json)
}

fn regression(json: bool) -> Result<(), Box<dyn Error>> {
    let x = array![[0.0], [1.0], [2.0], [3.0], [4.0]];
    let y = x.column(0).mapv(|x| 3.0 + 2.0 * x);

    let mut bgd = BatchGradientDescent::new(&x, &y, gradient_descent::Config::default())?;
    let mut history = History::new();
    let solution = bgd.fit_observed(&mut history).require_converged()?;

    let parameters = bgd.parameters();
    println!(
        "Fitted y = {:.4} + {:.4} x after {} iterations (gradient norm {:.2e})",
        parameters[0], parameters[1], solution.iters, solution.gradient_norm
    );
    if let (Some(&(_, first)), Some((_, last))) = (history.entries().first(), history.last()) {
        println!("Cost went from {first:.4} to {last:.2e}");
    }

    let new_rows = array![[5.0], [10.0]];
    let predictions = bgd.predict(&new_rows)?;
    for (row, prediction) in new_rows.column(0).iter().zip(&predictions) {
        println!("Prediction at x = {row}: {prediction:.4}");
    }

    if json {
        let value = json!({
            "status": format!("{:?}", solution.status),
            "iters": solution.iters,
            "cost": solution.cost,
            "gradient_norm": solution.gradient_norm,
            "parameters": parameters.to_vec(),
            "predictions": predictions.to_vec(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    }

    Ok(())
}

fn print_bracket(iter: usize, bracket: &Bracket) {
    println!("Iteration {iter}:");
    println!("a = {}, b = {}", bracket.a, bracket.b);
    println!("x = {}, y = {}", bracket.x.x, bracket.y.x);
    println!("f(x) = {}, f(y) = {}", bracket.x.objective, bracket.y.objective);
    println!();
}

fn report_maximum(
    solution: &golden_section::Solution<f64, f64>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    println!("Maximum occurs at θ = {}, f(θ) = {}", solution.x, solution.objective);

    if json {
        let value = json!({
            "status": format!("{:?}", solution.status),
            "x": solution.x,
            "objective": solution.objective,
            "bracket": solution.bracket,
            "iters": solution.iters,
            "evaluations": solution.evaluations,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    }

    Ok(())
}
