pub mod activation;
pub mod loss;
pub mod metrics;
pub mod shape;

pub use activation::*;
pub use loss::*;
pub use metrics::*;
pub use shape::*;
