use std::path::Path;

use ndarray::Array1;
use plotly::common::Mode;
use plotly::{Bar, Plot, Scatter};
use tracing::debug;

use super::Hyper;
use crate::data::LinearDataset;
use crate::unit::{LinearUnit, ScalarRegressor};
use crate::UnitError;

/// Fixed-epoch online gradient descent for a [`ScalarRegressor`]. Samples are
/// visited in dataset order every epoch and there is no early stopping.
pub struct StochasticGradientDescent<'a> {
    regressor: &'a mut ScalarRegressor,
    hyper: Hyper,
    verbose: bool,
    pub losses: Vec<f64>,
}

impl StochasticGradientDescent<'_> {
    pub fn new(regressor: &mut ScalarRegressor) -> StochasticGradientDescent {
        StochasticGradientDescent {
            regressor,
            hyper: Hyper {
                learning_rate: 0.01,
                ..Hyper::new()
            },
            verbose: false,
            losses: vec![],
        }
    }

    pub fn override_hyper(&mut self, hyper: Hyper) -> &mut Self {
        self.hyper = hyper;
        self
    }

    pub fn verbose(&mut self) -> &mut Self {
        self.verbose = true;
        self
    }

    pub fn set_learning_rate(&mut self, rate: f64) -> &mut Self {
        self.hyper.learning_rate = rate;
        self
    }

    pub fn set_epochs(&mut self, epochs: usize) -> &mut Self {
        self.hyper.epochs = epochs;
        self
    }

    /// Runs every epoch and records the mean pre-update cost of each.
    pub fn train(&mut self, data: &LinearDataset) -> Result<&mut Self, UnitError> {
        self.hyper.validate_sgd()?;

        for epoch in 0..self.hyper.epochs {
            let mut costs: Vec<f64> = Vec::with_capacity(data.len());

            for (x, y) in data.iter() {
                costs.push(self.regressor.cost(x, y));
                self.regressor
                    .train_step(&x, y, self.hyper.learning_rate)?;
            }

            let avg_loss = Array1::from(costs).mean().unwrap_or(0.);
            self.losses.push(avg_loss);

            debug!(epoch, avg_loss, weight = self.regressor.weight(), "sgd epoch");

            if self.verbose {
                println!(
                    "({}/{}) Loss = {} w = {}",
                    epoch + 1,
                    self.hyper.epochs,
                    avg_loss,
                    self.regressor.weight()
                );
            }
        }

        Ok(self)
    }

    pub fn loss_graph(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let mut plot = Plot::new();

        let x = (0..self.losses.len()).collect();

        let trace = Bar::new(x, self.losses.clone());
        plot.add_trace(trace);
        plot.write_html(path);

        self
    }

    /// Training scatter with the fitted line `y = w * x` drawn over it.
    pub fn fit_graph(&mut self, data: &LinearDataset, path: impl AsRef<Path>) -> &mut Self {
        let mut plot = Plot::new();

        let fitted = data.x.mapv(|x| self.regressor.predict(x));

        let samples = Scatter::new(data.x.to_vec(), data.y.to_vec())
            .mode(Mode::Markers)
            .name("samples");
        let line = Scatter::new(data.x.to_vec(), fitted.to_vec())
            .mode(Mode::Lines)
            .name("fit");

        plot.add_trace(samples);
        plot.add_trace(line);
        plot.write_html(path);

        self
    }
}
