use ndarray::{Array1, Array2};

/// Returns `Xθ − y`.
pub(super) fn residuals(
    design: &Array2<f64>,
    target: &Array1<f64>,
    parameters: &Array1<f64>,
) -> Array1<f64> {
    design.dot(parameters) - target
}

/// Returns `J(θ) = mean(r²) / 2`.
pub(super) fn cost(residuals: &Array1<f64>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = residuals.len() as f64;
    residuals.dot(residuals) / (2.0 * n)
}

/// Returns `∇J(θ) = Xᵀ r / n`.
pub(super) fn gradient(design: &Array2<f64>, residuals: &Array1<f64>) -> Array1<f64> {
    #[allow(clippy::cast_precision_loss)]
    let n = residuals.len() as f64;
    design.t().dot(residuals) / n
}

/// Euclidean norm.
pub(super) fn norm(vector: &Array1<f64>) -> f64 {
    vector.dot(vector).sqrt()
}
