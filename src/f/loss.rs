/// Per-example squared error `(pred - target)^2`.
pub fn squared_error(pred: f64, target: f64) -> f64 {
    (pred - target).powi(2)
}

/// Derivative of `(x * w - target)^2` with respect to `w`.
pub fn squared_error_grad(x: f64, pred: f64, target: f64) -> f64 {
    2. * (pred - target) * x
}
