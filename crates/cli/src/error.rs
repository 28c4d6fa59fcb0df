// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI errors.
use thiserror::Error;

use pokerhand_cards::ParseError;

/// Errors that stop a classification run.
#[derive(Debug, Error)]
pub enum Error {
    /// No input file given.
    #[error("no input file given, use - to read from stdin")]
    Usage,
    /// The input file cannot be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The input path.
        path: String,
        /// The read error.
        source: std::io::Error,
    },
    /// A hand failed to parse.
    #[error("line {line}: invalid hand '{hand}': {source}")]
    InvalidHand {
        /// The 1-based line number.
        line: usize,
        /// The hand text.
        hand: String,
        /// The parse error.
        source: ParseError,
    },
    /// Writing the results failed.
    #[error("cannot write results: {0}")]
    Output(#[from] anyhow::Error),
}

impl Error {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Output(_) => 1,
            Error::Usage => 2,
            Error::Io { .. } => 3,
            Error::InvalidHand { .. } => 4,
        }
    }
}
