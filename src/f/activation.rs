/// Bipolar sign threshold. Exactly zero resolves to `+1`.
pub fn sign(x: f64) -> f64 {
    if x >= 0. {
        return 1.;
    }

    -1.
}

/// True when `x` lies strictly inside the open band `(-margin, margin)`.
pub fn ambiguous(x: f64, margin: f64) -> bool {
    -margin < x && x < margin
}
