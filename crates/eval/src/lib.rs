// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker hand classifier.
//!
//! Classifies a five cards hand into one of the ten standard poker categories,
//! from a royal flush down to a high card. Parse a [Hand] from its text form and
//! call [classify] to get its [HandCategory]:
//!
//! ```
//! # use pokerhand_eval::*;
//! let hand = "AH 2S 3C 4D 5S".parse::<Hand>().unwrap();
//! assert_eq!(classify(&hand), HandCategory::Straight);
//! assert_eq!(classify(&hand).to_string(), "Straight");
//! ```
//!
//! The [batch] module evaluates a text with one hand per line:
//!
//! ```
//! # use pokerhand_eval::batch;
//! let evals = batch::evaluate("AH KH QH JH TH\n2H 2S 2C 5D 5H\n");
//! assert_eq!(evals.len(), 2);
//! assert_eq!(evals[1].line, 2);
//! ```
//!
//! The **`parallel`** feature adds [batch::par_evaluate] that splits the lines
//! across a given number of tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod batch;
pub mod eval;
pub use eval::{HandCategory, RankCount, RankOrder, classify};

// Reexport cards types.
pub use pokerhand_cards::{Card, Deck, Hand, ParseError, Rank, Suit};
