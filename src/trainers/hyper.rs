use serde::{Deserialize, Serialize};

use crate::f;
use crate::UnitError;

/// Rule deciding when a pattern no longer needs training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Activation outside `(-margin, margin)`, whatever its sign.
    #[default]
    Margin,
    /// Outside the band and on the same side as the target.
    MarginAndSign,
}

impl Criterion {
    pub fn converged(&self, activation: f64, target: f64, margin: f64) -> bool {
        // NaN or infinite responses sit on neither side of the band.
        if !activation.is_finite() || f::ambiguous(activation, margin) {
            return false;
        }

        match self {
            Criterion::Margin => true,
            Criterion::MarginAndSign => f::sign(activation) == f::sign(target),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyper {
    pub learning_rate: f64,
    pub epochs: usize,
    pub max_rounds: usize,
    pub margin: f64,
    pub criterion: Criterion,
}

impl Hyper {
    pub fn new() -> Hyper {
        Hyper {
            learning_rate: 0.005,
            epochs: 100,
            max_rounds: 1000,
            margin: 0.5,
            criterion: Criterion::Margin,
        }
    }

    /// Missing fields fall back to [`Hyper::new`].
    pub fn from_json(raw: &str) -> Result<Hyper, UnitError> {
        let hyper: Hyper = serde_json::from_str(raw)?;
        hyper.validate()?;
        Ok(hyper)
    }

    /// Checks every field, for configs loaded without a trainer in mind.
    pub fn validate(&self) -> Result<(), UnitError> {
        self.validate_lms()?;
        self.check_epochs()
    }

    /// Fields read by the LMS round loop.
    pub fn validate_lms(&self) -> Result<(), UnitError> {
        self.check_learning_rate()?;

        if !self.margin.is_finite() || self.margin <= 0. {
            return Err(UnitError::InvalidHyper(format!(
                "margin must be a positive number, got {}",
                self.margin
            )));
        }

        if self.max_rounds == 0 {
            return Err(UnitError::InvalidHyper("max_rounds must be at least 1".into()));
        }

        Ok(())
    }

    /// Fields read by the fixed-epoch gradient descent loop.
    pub fn validate_sgd(&self) -> Result<(), UnitError> {
        self.check_learning_rate()?;
        self.check_epochs()
    }

    fn check_learning_rate(&self) -> Result<(), UnitError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0. {
            return Err(UnitError::InvalidHyper(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }

        Ok(())
    }

    fn check_epochs(&self) -> Result<(), UnitError> {
        if self.epochs == 0 {
            return Err(UnitError::InvalidHyper("epochs must be at least 1".into()));
        }

        Ok(())
    }
}

impl Default for Hyper {
    fn default() -> Hyper {
        Hyper::new()
    }
}
