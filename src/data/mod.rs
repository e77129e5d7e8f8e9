mod linear;
mod patterns;

pub use linear::{linear_with_noise, LinearDataset};
pub use patterns::{knobby_patterns, Pattern};
