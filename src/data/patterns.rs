use serde::{Deserialize, Serialize};

/// A named input vector with its desired bipolar response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub input: Vec<f64>,
    pub target: f64,
}

impl Pattern {
    pub fn new(name: &str, input: Vec<f64>, target: f64) -> Pattern {
        Pattern {
            name: name.to_string(),
            input,
            target,
        }
    }
}

const T: f64 = 1.;
const J: f64 = -1.;

// 4x4 grids, row-major, 1 = lit knob.
#[rustfmt::skip]
const KNOBBY: [(&str, [f64; 16], f64); 8] = [
    ("T1", [ 1.,  1.,  1., -1., -1.,  1., -1., -1., -1.,  1., -1., -1., -1.,  1., -1., -1.], T),
    ("J1", [-1., -1.,  1., -1., -1., -1.,  1., -1.,  1., -1.,  1., -1.,  1.,  1.,  1., -1.], J),
    ("T2", [-1.,  1.,  1.,  1., -1., -1.,  1., -1., -1., -1.,  1., -1., -1., -1.,  1., -1.], T),
    ("J2", [-1., -1., -1.,  1., -1., -1., -1.,  1., -1.,  1., -1.,  1., -1.,  1.,  1.,  1.], J),
    ("T3", [-1., -1., -1., -1.,  1., -1., -1., -1.,  1.,  1.,  1.,  1.,  1., -1., -1., -1.], T),
    ("J3", [-1., -1., -1., -1.,  1.,  1.,  1.,  1., -1., -1., -1.,  1., -1., -1.,  1.,  1.], J),
    ("T4", [ 1., -1., -1., -1.,  1.,  1.,  1.,  1.,  1., -1., -1., -1., -1., -1., -1., -1.], T),
    ("J4", [ 1.,  1.,  1.,  1., -1., -1., -1.,  1., -1., -1.,  1.,  1., -1., -1., -1., -1.], J),
];

/// Widrow's knobby training set: four shifted or rotated T shapes (`+1`)
/// interleaved with four J shapes (`-1`).
pub fn knobby_patterns() -> Vec<Pattern> {
    KNOBBY
        .iter()
        .map(|(name, input, target)| Pattern::new(name, input.to_vec(), *target))
        .collect()
}
