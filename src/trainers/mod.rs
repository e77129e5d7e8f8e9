mod hyper;
mod lms;
mod sgd;

pub use hyper::{Criterion, Hyper};
pub use lms::{Convergence, LmsTrainer, Round};
pub use sgd::StochasticGradientDescent;
