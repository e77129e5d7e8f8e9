use serde::{Deserialize, Serialize};

use super::LinearUnit;
use crate::f;
use crate::UnitError;

/// One-weight regressor `y = w * x` with no intercept, fitted by
/// per-example gradient steps on squared error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarRegressor {
    w: f64,
}

impl ScalarRegressor {
    pub fn new() -> ScalarRegressor {
        ScalarRegressor { w: 0. }
    }

    pub fn with_weight(w: f64) -> ScalarRegressor {
        ScalarRegressor { w }
    }

    pub fn weight(&self) -> f64 {
        self.w
    }

    pub fn predict(&self, x: f64) -> f64 {
        x * self.w
    }

    pub fn cost(&self, x: f64, y: f64) -> f64 {
        f::squared_error(self.predict(x), y)
    }
}

impl LinearUnit for ScalarRegressor {
    type Input = f64;

    fn activate(&self, x: &f64) -> Result<f64, UnitError> {
        Ok(self.predict(*x))
    }

    fn train_step(&mut self, x: &f64, target: f64, learning_rate: f64) -> Result<f64, UnitError> {
        let response = self.predict(*x);
        let gradient = f::squared_error_grad(*x, response, target);
        self.w -= gradient * learning_rate;

        Ok(response)
    }
}
