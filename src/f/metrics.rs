pub fn accuracy<T: Copy + PartialEq>(prediction: &[T], actual: &[T]) -> f64 {
    assert_eq!(
        prediction.len(),
        actual.len(),
        "Predictions and labels must be of the same length."
    );

    if prediction.is_empty() {
        return 0.;
    }

    let hits = prediction
        .iter()
        .zip(actual.iter())
        .filter(|(p, a)| p == a)
        .count();

    (hits as f64 / prediction.len() as f64) * 100.
}

pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.;
    }

    part as f64 / total as f64 * 100.
}
