// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand parsing.
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Errors returned when parsing cards and hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The hand doesn't have exactly five cards.
    #[error("expected {size} cards, found {0}", size = Hand::SIZE)]
    CardCount(usize),
    /// A token is not two characters long.
    #[error("invalid card '{0}', expected a rank and a suit")]
    InvalidToken(String),
    /// The rank symbol is not one of `23456789TJQKA`.
    #[error("invalid rank '{rank}' in card '{token}'")]
    InvalidRank {
        /// The invalid rank symbol.
        rank: char,
        /// The card token.
        token: String,
    },
    /// The suit symbol is not one of `HSCD`.
    #[error("invalid suit '{suit}' in card '{token}'")]
    InvalidSuit {
        /// The invalid suit symbol.
        suit: char,
        /// The card token.
        token: String,
    },
    /// The same card appears twice in a hand.
    #[error("duplicate card '{0}'")]
    DuplicateCard(Card),
}

/// A five cards poker hand.
///
/// The cards are kept in the order they were given, a hand never holds the
/// same card twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    pub fn new(cards: [Card; Hand::SIZE]) -> Result<Self, ParseError> {
        for (idx, card) in cards.iter().enumerate() {
            if cards[..idx].contains(card) {
                return Err(ParseError::DuplicateCard(*card));
            }
        }

        Ok(Self(cards))
    }

    /// The hand cards in input order.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.0
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    /// Parses five card tokens separated by single spaces.
    ///
    /// The number of tokens is checked first, then each token from left to
    /// right, the first invalid token rejects the whole hand.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tokens = if text.is_empty() {
            Vec::new()
        } else {
            text.split(' ').collect::<Vec<_>>()
        };

        if tokens.len() != Hand::SIZE {
            return Err(ParseError::CardCount(tokens.len()));
        }

        let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); Hand::SIZE];
        for (card, token) in cards.iter_mut().zip(tokens) {
            *card = token.parse()?;
        }

        Hand::new(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = ParseError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; Hand::SIZE]>::try_from(cards)
            .map_err(|_| ParseError::CardCount(cards.len()))?;
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
