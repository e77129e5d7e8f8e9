use std::ops::Range;

use ndarray::{Array1, ArrayView1};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::LinearUnit;
use crate::error::check_dimension;
use crate::f;
use crate::UnitError;

/// Adaptive linear element: a weight vector trained with the LMS rule and
/// read out through a bipolar sign threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adaline {
    w: Array1<f64>,
}

impl Adaline {
    pub fn new(d_in: usize) -> Adaline {
        Adaline {
            w: Array1::zeros(d_in),
        }
    }

    pub fn from_weights(w: Array1<f64>) -> Adaline {
        Adaline { w }
    }

    /// Small uniform initial weights drawn from `spread`.
    pub fn random<R: Rng + ?Sized>(d_in: usize, spread: Range<f64>, rng: &mut R) -> Adaline {
        Adaline {
            w: Array1::random_using(d_in, Uniform::new(spread.start, spread.end), rng),
        }
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.w
    }

    pub fn d_in(&self) -> usize {
        self.w.len()
    }

    /// Bipolar classification of `x`: `+1` when the activation is `>= 0`.
    pub fn output(&self, x: &[f64]) -> Result<f64, UnitError> {
        Ok(f::sign(self.activate(x)?))
    }

    fn view<'a>(&self, x: &'a [f64]) -> Result<ArrayView1<'a, f64>, UnitError> {
        check_dimension(self.w.len(), x.len())?;
        Ok(ArrayView1::from(x))
    }
}

impl LinearUnit for Adaline {
    type Input = [f64];

    fn activate(&self, x: &[f64]) -> Result<f64, UnitError> {
        Ok(self.view(x)?.dot(&self.w))
    }

    fn train_step(&mut self, x: &[f64], target: f64, learning_rate: f64) -> Result<f64, UnitError> {
        let x = self.view(x)?;
        let response = x.dot(&self.w);
        let error = target - response;

        // Every component shares the same pre-step error, so the update is
        // applied against a single weight snapshot.
        self.w.scaled_add(2. * learning_rate * error, &x);

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn starts_at_zero() {
        let unit = Adaline::new(16);
        assert_eq!(unit.d_in(), 16);
        assert!(unit.weights().iter().all(|w| *w == 0.));
    }

    #[test]
    fn activate_is_dot_product() {
        let unit = Adaline::from_weights(array![0.5, -1., 2.]);
        let a = unit.activate(&[1., 2., 3.]).unwrap();
        assert_relative_eq!(a, 0.5 - 2. + 6.);
    }

    #[test]
    fn output_thresholds_at_zero() {
        let unit = Adaline::from_weights(array![1., -1.]);
        assert_eq!(unit.output(&[1., 1.]).unwrap(), 1.);
        assert_eq!(unit.output(&[1., 2.]).unwrap(), -1.);
        assert_eq!(unit.output(&[2., 1.]).unwrap(), 1.);
    }

    #[test]
    fn lms_step_moves_weights_along_input() {
        let mut unit = Adaline::from_weights(array![0.1, -0.2, 0.3]);
        let x = [1., -1., 1.];
        let (mu, d) = (0.05, -1.);

        let before = unit.weights().clone();
        let y = unit.activate(&x).unwrap();
        let response = unit.train_step(&x, d, mu).unwrap();
        assert_relative_eq!(response, y);

        for i in 0..3 {
            let expected = before[i] + 2. * mu * (d - y) * x[i];
            assert_relative_eq!(unit.weights()[i], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn lms_step_reduces_error_on_same_input() {
        let mut unit = Adaline::new(4);
        let x = [1., -1., 1., -1.];
        unit.train_step(&x, 1., 0.05).unwrap();
        let after = unit.activate(&x).unwrap();
        assert!((1. - after).abs() < 1.);
    }

    #[test]
    fn mismatch_fails_without_touching_weights() {
        let mut unit = Adaline::from_weights(array![0.25, 0.5]);

        assert!(matches!(
            unit.activate(&[1.]),
            Err(UnitError::DimensionMismatch { expected: 2, got: 1 })
        ));
        assert!(unit.output(&[1., 2., 3.]).is_err());
        assert!(matches!(
            unit.train_step(&[1., 1., 1.], 1., 0.1),
            Err(UnitError::DimensionMismatch { expected: 2, got: 3 })
        ));
        assert_eq!(unit.weights(), &array![0.25, 0.5]);
    }

    #[test]
    fn random_weights_stay_in_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        let unit = Adaline::random(32, -0.01..0.01, &mut rng);
        assert_eq!(unit.d_in(), 32);
        assert!(unit.weights().iter().all(|w| (-0.01..0.01).contains(w)));
    }
}
