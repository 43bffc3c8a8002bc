use ndarray::ArrayView1;

/// Event emitted by gradient descent at the start of each iteration.
///
/// Values describe the parameters before this iteration's update.
#[derive(Debug, Clone)]
pub struct Event<'a> {
    /// Zero-based iteration number, equal to the updates applied so far.
    pub iter: usize,

    /// Cost `J(θ)` at the current parameters.
    pub cost: f64,

    /// Euclidean norm of the gradient at the current parameters.
    pub gradient_norm: f64,

    /// Current parameters; index 0 is the bias.
    pub parameters: ArrayView1<'a, f64>,
}
