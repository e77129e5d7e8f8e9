mod adaline;
mod scalar;

pub use adaline::Adaline;
pub use scalar::ScalarRegressor;

use crate::UnitError;

/// A single linear unit trained online, one example at a time.
pub trait LinearUnit {
    type Input: ?Sized;

    /// Raw, unthresholded response to `x`.
    fn activate(&self, x: &Self::Input) -> Result<f64, UnitError>;

    /// Applies one update towards `target` and returns the response computed
    /// before the update.
    fn train_step(
        &mut self,
        x: &Self::Input,
        target: f64,
        learning_rate: f64,
    ) -> Result<f64, UnitError>;
}
