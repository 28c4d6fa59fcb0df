// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier CLI.
//!
//! Reads a file with one hand per line, classifies all the hands and writes
//! each hand with its category. By default an invalid hand stops the run
//! before anything is written, with [Config::keep_going] invalid hands are
//! logged and skipped.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use log::{debug, info, warn};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use pokerhand_eval::{
    HandCategory,
    batch::{self, Summary},
};

pub mod error;
pub use error::Error;

pub mod report;
pub use report::{Format, Report};

/// The classifier configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The input file, `-` for stdin.
    pub input: Option<String>,
    /// The output format.
    pub format: Format,
    /// Skip invalid hands instead of stopping.
    pub keep_going: bool,
    /// Number of classification tasks.
    pub tasks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            format: Format::Text,
            keep_going: false,
            tasks: 1,
        }
    }
}

/// Reads the input, classifies the hands and writes the results to `out`.
pub fn run<W: Write>(config: &Config, out: W) -> Result<Summary, Error> {
    let input = config.input.as_deref().ok_or(Error::Usage)?;
    let text = read_input(input)?;
    info!("Classifying hands from {input}");
    process(&text, config, out)
}

/// Reads the whole input file, `-` reads from stdin.
pub fn read_input(input: &str) -> Result<String, Error> {
    let io_error = |source| Error::Io {
        path: input.to_string(),
        source,
    };

    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(io_error)?;
        Ok(text)
    } else {
        fs::read_to_string(Path::new(input)).map_err(io_error)
    }
}

/// Classifies the hands in `text` and writes the results to `out`.
pub fn process<W: Write>(text: &str, config: &Config, out: W) -> Result<Summary, Error> {
    let evals = if config.tasks > 1 {
        batch::par_evaluate(text, config.tasks)
    } else {
        batch::evaluate(text)
    };

    if !config.keep_going {
        let invalid = evals
            .iter()
            .find_map(|eval| eval.result.as_ref().err().map(|err| (eval, err)));

        if let Some((eval, err)) = invalid {
            return Err(Error::InvalidHand {
                line: eval.line,
                hand: eval.hand.to_string(),
                source: err.clone(),
            });
        }
    }

    let mut report = Report::new(config.format, out);
    for eval in &evals {
        match &eval.result {
            Ok(category) => {
                debug!("Line {} {} => {category}", eval.line, eval.hand);
                report.write(eval.line, eval.hand, *category)?;
            }
            Err(err) => warn!("Skipping line {} '{}': {err}", eval.line, eval.hand),
        }
    }
    report.finish()?;

    let summary = Summary::new(&evals);
    info!(
        "Classified {} hands, {} invalid",
        summary.total() - summary.invalid(),
        summary.invalid()
    );

    for category in HandCategory::categories().rev() {
        debug!("{category}: {}", summary.count(category));
    }

    Ok(summary)
}
