use ndarray::Array1;
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::error::check_dimension;
use crate::f;
use crate::UnitError;

/// Paired scalar samples for single-variable regression.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearDataset {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

impl LinearDataset {
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Result<LinearDataset, UnitError> {
        check_dimension(x.len(), y.len())?;
        Ok(LinearDataset { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// `n` evenly spaced points on `[-1, 1]` with `y = slope * x` plus gaussian
/// noise of standard deviation `noise`.
pub fn linear_with_noise<R: Rng + ?Sized>(n: usize, slope: f64, noise: f64, rng: &mut R) -> LinearDataset {
    let x = f::linspace(-1., 1., n);
    let jitter: Array1<f64> = Array1::random_using(n, StandardNormal, rng);
    let y = &x * slope + jitter * noise;

    LinearDataset { x, y }
}
