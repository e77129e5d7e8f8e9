use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnitError {
    /// Input length differs from the number of weights held by the unit.
    #[error("dimension mismatch: unit holds {expected} weights, input has {got} values")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("invalid hyperparameter: {0}")]
    InvalidHyper(String),

    #[error("could not parse hyperparameters: {0}")]
    Config(#[from] serde_json::Error),
}

pub fn check_dimension(expected: usize, got: usize) -> Result<(), UnitError> {
    if expected != got {
        return Err(UnitError::DimensionMismatch { expected, got });
    }

    Ok(())
}
