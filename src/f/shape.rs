use ndarray::Array1;
use ndarray_stats::QuantileExt;

/// Smallest absolute activation across a set of responses, i.e. the pattern
/// closest to the ambiguous band. `None` for an empty set.
pub fn weakest_margin(activations: &[f64]) -> Option<f64> {
    let abs = Array1::from_iter(activations.iter().map(|a| a.abs()));
    abs.min().ok().copied()
}

pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    Array1::linspace(start, end, n)
}
