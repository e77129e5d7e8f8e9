use std::path::Path;

use plotly::{Bar, Plot};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{Criterion, Hyper};
use crate::data::Pattern;
use crate::error::check_dimension;
use crate::report;
use crate::unit::{Adaline, LinearUnit};
use crate::UnitError;

/// Tally taken after one training round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    pub round: usize,
    pub converged: usize,
    pub total: usize,
}

impl Round {
    pub fn complete(&self) -> bool {
        self.converged == self.total
    }
}

/// How an LMS training run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    Converged { rounds: usize },
    /// The round cap was hit with `converged` patterns settled.
    Exhausted { rounds: usize, converged: usize },
}

impl Convergence {
    pub fn is_converged(&self) -> bool {
        matches!(self, Convergence::Converged { .. })
    }

    pub fn rounds(&self) -> usize {
        match self {
            Convergence::Converged { rounds } => *rounds,
            Convergence::Exhausted { rounds, .. } => *rounds,
        }
    }
}

/// Round-based LMS training for an [`Adaline`]. Patterns that already sit
/// outside the ambiguous band are skipped until a later round pulls them
/// back in.
pub struct LmsTrainer<'a> {
    adaline: &'a mut Adaline,
    hyper: Hyper,
    observer: Box<dyn FnMut(&Round) + 'a>,
    verbose: bool,
    converged: Vec<bool>,
    pub rounds: Vec<Round>,
}

impl<'a> LmsTrainer<'a> {
    pub fn new(adaline: &'a mut Adaline) -> LmsTrainer<'a> {
        LmsTrainer {
            adaline,
            hyper: Hyper::new(),
            observer: Box::new(|_: &Round| ()),
            verbose: false,
            converged: vec![],
            rounds: vec![],
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

    pub fn set_max_rounds(&mut self, max_rounds: usize) -> &mut Self {
        self.hyper.max_rounds = max_rounds;
        self
    }

    pub fn set_margin(&mut self, margin: f64) -> &mut Self {
        self.hyper.margin = margin;
        self
    }

    pub fn set_criterion(&mut self, criterion: Criterion) -> &mut Self {
        self.hyper.criterion = criterion;
        self
    }

    /// Called with the tally of every finished round.
    pub fn on_round(&mut self, observer: impl FnMut(&Round) + 'a) -> &mut Self {
        self.observer = Box::new(observer);
        self
    }

    /// Per-pattern convergence flags from the last finished round.
    pub fn converged(&self) -> &[bool] {
        &self.converged
    }

    pub fn train(&mut self, patterns: &[Pattern]) -> Result<Convergence, UnitError> {
        self.hyper.validate_lms()?;
        for pattern in patterns.iter() {
            check_dimension(self.adaline.d_in(), pattern.input.len())?;
        }

        self.converged = vec![false; patterns.len()];
        self.rounds.clear();

        let total = patterns.len();
        let mut round = 0;

        while !self.converged.iter().all(|c| *c) {
            if round == self.hyper.max_rounds {
                let converged = self.count();
                warn!(rounds = round, converged, total, "lms round cap reached");
                return Ok(Convergence::Exhausted {
                    rounds: round,
                    converged,
                });
            }

            for (pattern, done) in patterns.iter().zip(self.converged.iter()) {
                if !*done {
                    self.adaline
                        .train_step(&pattern.input, pattern.target, self.hyper.learning_rate)?;
                }
            }

            for (pattern, done) in patterns.iter().zip(self.converged.iter_mut()) {
                let activation = self.adaline.activate(&pattern.input)?;
                *done = self
                    .hyper
                    .criterion
                    .converged(activation, pattern.target, self.hyper.margin);
            }

            round += 1;
            let tally = Round {
                round,
                converged: self.count(),
                total,
            };
            debug!(round, converged = tally.converged, total, "lms round");

            if self.verbose {
                println!("{}", report::round_line(&tally));
            }

            (self.observer)(&tally);
            self.rounds.push(tally);
        }

        info!(rounds = round, total, "lms converged");
        Ok(Convergence::Converged { rounds: round })
    }

    fn count(&self) -> usize {
        self.converged.iter().filter(|c| **c).count()
    }

    /// Bar chart of converged patterns per round, written as HTML.
    pub fn progress_graph(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let mut plot = Plot::new();

        let x = self.rounds.iter().map(|r| r.round).collect();
        let y = self.rounds.iter().map(|r| r.converged).collect();

        let trace = Bar::new(x, y);
        plot.add_trace(trace);
        plot.write_html(path);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::knobby_patterns;

    fn xor_like() -> Vec<Pattern> {
        vec![
            Pattern::new("a", vec![1., 1.], 1.),
            Pattern::new("b", vec![1., 1.], -1.),
        ]
    }

    #[test]
    fn knobby_patterns_converge() {
        let patterns = knobby_patterns();
        let mut adaline = Adaline::new(16);
        let outcome = LmsTrainer::new(&mut adaline).train(&patterns).unwrap();

        assert!(outcome.is_converged());
        assert!(outcome.rounds() < 100);
    }

    #[test]
    fn rounds_are_recorded_and_observed() {
        let patterns = knobby_patterns();
        let mut adaline = Adaline::new(16);
        let mut seen = vec![];

        let mut trainer = LmsTrainer::new(&mut adaline);
        let outcome = trainer
            .on_round(|r| seen.push(*r))
            .train(&patterns)
            .unwrap();

        assert_eq!(trainer.rounds.len(), outcome.rounds());
        assert!(trainer.rounds.last().unwrap().complete());
        assert!(trainer.converged().iter().all(|c| *c));
        assert!(trainer.rounds.iter().all(|r| r.total == 8));
        drop(trainer);

        assert_eq!(seen.len(), outcome.rounds());
        assert_eq!(seen.first().unwrap().round, 1);
    }

    #[test]
    fn contradictory_patterns_hit_the_cap() {
        let patterns = xor_like();
        let mut adaline = Adaline::new(2);
        let outcome = LmsTrainer::new(&mut adaline)
            .set_max_rounds(50)
            .train(&patterns)
            .unwrap();

        assert_eq!(
            outcome,
            Convergence::Exhausted {
                rounds: 50,
                converged: 0
            }
        );
    }

    #[test]
    fn bad_pattern_aborts_before_any_update() {
        let patterns = vec![
            Pattern::new("ok", vec![1., -1., 1.], 1.),
            Pattern::new("short", vec![1., -1.], -1.),
        ];
        let mut adaline = Adaline::new(3);
        let result = LmsTrainer::new(&mut adaline).train(&patterns);

        assert!(matches!(
            result,
            Err(UnitError::DimensionMismatch { expected: 3, got: 2 })
        ));
        assert_eq!(adaline, Adaline::new(3));
    }

    #[test]
    fn invalid_learning_rate_is_rejected() {
        let mut adaline = Adaline::new(16);
        let result = LmsTrainer::new(&mut adaline)
            .set_learning_rate(0.)
            .train(&knobby_patterns());

        assert!(matches!(result, Err(UnitError::InvalidHyper(_))));
    }

    #[test]
    fn settled_patterns_sit_out_the_next_round() {
        let patterns = vec![
            Pattern::new("strong", vec![2., 0.], 1.),
            Pattern::new("weak", vec![0., 0.5], 1.),
        ];
        let mu = 0.1;

        let mut adaline = Adaline::new(2);
        let mut trainer = LmsTrainer::new(&mut adaline);
        let outcome = trainer
            .set_learning_rate(mu)
            .set_max_rounds(2)
            .train(&patterns)
            .unwrap();

        assert_eq!(
            outcome,
            Convergence::Exhausted {
                rounds: 2,
                converged: 1
            }
        );
        assert_eq!(trainer.converged(), &[true, false]);
        drop(trainer);

        // Round 1 trains both; round 2 only the pattern still in the band.
        let mut expected = Adaline::new(2);
        expected.train_step(&patterns[0].input, 1., mu).unwrap();
        expected.train_step(&patterns[1].input, 1., mu).unwrap();
        expected.train_step(&patterns[1].input, 1., mu).unwrap();

        assert_eq!(adaline, expected);
        assert_eq!(adaline.weights()[0], 0.4);
    }

    #[test]
    fn patterns_pulled_back_into_the_band_are_retrained() {
        let patterns = knobby_patterns();
        let mut adaline = Adaline::new(16);
        let mut trainer = LmsTrainer::new(&mut adaline);
        let outcome = trainer.train(&patterns).unwrap();

        assert!(outcome.is_converged());
        assert!(trainer
            .rounds
            .windows(2)
            .any(|w| w[1].converged < w[0].converged));
    }

    #[test]
    fn nan_response_is_never_settled() {
        let patterns = vec![Pattern::new("nan", vec![f64::NAN, 1.], 1.)];
        let mut adaline = Adaline::new(2);
        let outcome = LmsTrainer::new(&mut adaline)
            .set_max_rounds(3)
            .train(&patterns)
            .unwrap();

        assert_eq!(
            outcome,
            Convergence::Exhausted {
                rounds: 3,
                converged: 0
            }
        );
    }

    #[test]
    fn unused_epochs_do_not_block_training() {
        let mut adaline = Adaline::new(16);
        let hyper = Hyper {
            epochs: 0,
            ..Hyper::new()
        };
        let outcome = LmsTrainer::new(&mut adaline)
            .override_hyper(hyper)
            .train(&knobby_patterns())
            .unwrap();

        assert!(outcome.is_converged());
    }

    #[test]
    fn progress_graph_writes_html() {
        let path = std::env::temp_dir().join("knobby_lms_progress.html");
        let _ = std::fs::remove_file(&path);

        let mut adaline = Adaline::new(16);
        let mut trainer = LmsTrainer::new(&mut adaline);
        trainer.train(&knobby_patterns()).unwrap();
        trainer.progress_graph(&path);

        assert!(path.exists());
    }

    #[test]
    fn empty_dataset_is_trivially_converged() {
        let mut adaline = Adaline::new(4);
        let outcome = LmsTrainer::new(&mut adaline).train(&[]).unwrap();
        assert_eq!(outcome, Convergence::Converged { rounds: 0 });
    }
}
