use ndarray::{Array2, ArrayBase, Data, Ix2, s};

/// Builds a design matrix by prepending a column of ones to `data`.
///
/// A `(rows, features)` input yields a `(rows, features + 1)` matrix whose
/// first column carries the bias term.
pub fn with_bias<S>(data: &ArrayBase<S, Ix2>) -> Array2<f64>
where
    S: Data<Elem = f64>,
{
    let (rows, features) = data.dim();
    let mut design = Array2::ones((rows, features + 1));
    design.slice_mut(s![.., 1..]).assign(data);
    design
}
