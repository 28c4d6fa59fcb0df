// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards types and hand parsing.
//!
//! This crate defines the types to create cards:
//!
//! ```
//! # use pokerhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! a [Hand] type parsed from five space separated two characters tokens:
//!
//! ```
//! # use pokerhand_cards::{Hand, ParseError};
//! let hand = "AH KH QH JH TH".parse::<Hand>().unwrap();
//! assert_eq!(hand.cards().len(), 5);
//!
//! let err = "2X 3H 4H 5H 6H".parse::<Hand>().unwrap_err();
//! assert!(matches!(err, ParseError::InvalidSuit { suit: 'X', .. }));
//! ```
//!
//! and a [Deck] type for shuffling and iterating all the k-cards hands, for
//! example to count all the 5 cards hands:
//!
//! ```no_run
//! # use pokerhand_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, Rank, Suit};

mod hand;
pub use hand::{Hand, ParseError};
