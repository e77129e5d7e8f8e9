mod error;
pub mod data;
pub mod f;
pub mod report;
pub mod trainers;
pub mod unit;

pub use data::{knobby_patterns, linear_with_noise, LinearDataset, Pattern};
pub use error::UnitError;
pub use trainers::{Convergence, Criterion, Hyper, LmsTrainer, StochasticGradientDescent};
pub use unit::{Adaline, LinearUnit, ScalarRegressor};
