// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Batch evaluation of hands, one hand per line.
//!
//! Blank lines are skipped and each line is trimmed before parsing, the
//! evaluations keep the 1-based line number of each hand.
use pokerhand_cards::{Hand, ParseError};

use crate::eval::{HandCategory, classify};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_evaluate;

/// The result of evaluating a hand line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<'a> {
    /// The 1-based line number.
    pub line: usize,
    /// The hand text.
    pub hand: &'a str,
    /// The hand category or the error that rejected the hand.
    pub result: Result<HandCategory, ParseError>,
}

impl<'a> Evaluation<'a> {
    /// Parses and classifies a hand.
    pub fn new(line: usize, hand: &'a str) -> Self {
        let result = hand.parse::<Hand>().map(|hand| classify(&hand));
        Self { line, hand, result }
    }
}

/// Returns the line numbers and texts of the hands in `text`.
pub fn hands(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Evaluates all the hands in `text` in input order.
pub fn evaluate(text: &str) -> Vec<Evaluation<'_>> {
    hands(text)
        .map(|(line, hand)| Evaluation::new(line, hand))
        .collect()
}

/// Number of hands for each category in a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    counts: [usize; HandCategory::COUNT],
    invalid: usize,
}

impl Summary {
    /// Creates a summary for the given evaluations.
    pub fn new(evals: &[Evaluation<'_>]) -> Self {
        let mut summary = Self::default();
        evals.iter().for_each(|eval| summary.add(eval));
        summary
    }

    /// Adds an evaluation to this summary.
    pub fn add(&mut self, eval: &Evaluation<'_>) {
        match eval.result {
            Ok(category) => self.counts[category as usize] += 1,
            Err(_) => self.invalid += 1,
        }
    }

    /// Number of hands in the given category.
    pub fn count(&self, category: HandCategory) -> usize {
        self.counts[category as usize]
    }

    /// Number of invalid hands.
    pub fn invalid(&self) -> usize {
        self.invalid
    }

    /// Total number of hands, invalid ones included.
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.invalid
    }
}
