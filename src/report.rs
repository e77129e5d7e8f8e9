//! Console rendering for training progress and results.
//!
//! Glyphs follow the knobby board: `●` for a lit knob or a `+1` response,
//! `○` for `-1`.

use serde::Serialize;

use crate::data::Pattern;
use crate::f;
use crate::trainers::Round;
use crate::unit::{Adaline, LinearUnit};
use crate::UnitError;

pub const ON: char = '●';
pub const OFF: char = '○';

pub fn glyph(v: f64) -> char {
    if f::sign(v) > 0. {
        return ON;
    }

    OFF
}

/// One line per grid row, patterns laid side by side.
pub fn glyph_rows(patterns: &[Pattern], width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let height = patterns
        .iter()
        .map(|p| p.input.len().div_ceil(width))
        .max()
        .unwrap_or(0);

    (0..height)
        .map(|row| {
            patterns
                .iter()
                .map(|p| {
                    p.input
                        .iter()
                        .skip(row * width)
                        .take(width)
                        .map(|v| glyph(*v))
                        .collect::<String>()
                })
                .collect::<Vec<String>>()
                .join(" ")
        })
        .collect()
}

pub fn round_line(round: &Round) -> String {
    format!(
        "Training Round {:3}: Correct pattern responses {:2}, {:5.1}% complete.",
        round.round,
        round.converged,
        f::percent(round.converged, round.total)
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternResult {
    pub name: String,
    pub target: f64,
    pub output: f64,
    pub activation: f64,
}

impl PatternResult {
    pub fn correct(&self) -> bool {
        self.output == f::sign(self.target)
    }
}

pub fn results(adaline: &Adaline, patterns: &[Pattern]) -> Result<Vec<PatternResult>, UnitError> {
    patterns
        .iter()
        .map(|p| {
            let activation = adaline.activate(&p.input)?;
            Ok(PatternResult {
                name: p.name.clone(),
                target: p.target,
                output: f::sign(activation),
                activation,
            })
        })
        .collect()
}

pub fn result_line(result: &PatternResult) -> String {
    format!(
        "Pattern {} has response {} with an activation of {:19.16}",
        result.name,
        glyph(result.output),
        result.activation
    )
}

/// Share of correct outputs and the activation closest to the band.
pub fn summary_line(results: &[PatternResult]) -> String {
    let outputs = results.iter().map(|r| r.output).collect::<Vec<f64>>();
    let targets = results.iter().map(|r| f::sign(r.target)).collect::<Vec<f64>>();
    let activations = results.iter().map(|r| r.activation).collect::<Vec<f64>>();

    match f::weakest_margin(&activations) {
        Some(weakest) => format!(
            "{:5.1}% correct, weakest response {:.4}",
            f::accuracy(&outputs, &targets),
            weakest
        ),
        None => "no patterns".to_string(),
    }
}
