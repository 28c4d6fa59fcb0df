// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and the five cards classifier.
use serde::{Deserialize, Serialize};
use std::fmt;

use pokerhand_cards::{Card, Hand, Rank};

use super::{RankCount, RankOrder};

/// The category of a five cards hand, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs, no straights and no flushes.
    #[serde(rename = "High card")]
    HighCard = 0,
    /// Two cards of the same rank.
    #[serde(rename = "One pair")]
    OnePair,
    /// Two different pairs.
    #[serde(rename = "Two pair")]
    TwoPair,
    /// Three cards of the same rank.
    #[serde(rename = "Three of a kind")]
    ThreeOfAKind,
    /// Five consecutive ranks with mixed suits.
    #[serde(rename = "Straight")]
    Straight,
    /// Five cards of the same suit.
    #[serde(rename = "Flush")]
    Flush,
    /// Three of a kind and a pair.
    #[serde(rename = "Full house")]
    FullHouse,
    /// Four cards of the same rank.
    #[serde(rename = "Four of a kind")]
    FourOfAKind,
    /// Five consecutive ranks of the same suit.
    #[serde(rename = "Straight flush")]
    StraightFlush,
    /// Ten to ace of the same suit.
    #[serde(rename = "Royal flush")]
    RoyalFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category label.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card with its value under the current ace valuation.
#[derive(Debug, Clone, Copy)]
struct Valued {
    value: u8,
    card: Card,
}

type Sorted = [Valued; Hand::SIZE];

/// Classifies a hand.
pub fn classify(hand: &Hand) -> HandCategory {
    let sorted = sort_high(hand);

    if is_flush(&sorted) {
        return match straight_top(&sorted) {
            Some(Rank::Ace) => HandCategory::RoyalFlush,
            Some(_) => HandCategory::StraightFlush,
            None => HandCategory::Flush,
        };
    }

    if straight_top(&sorted).is_some() {
        return HandCategory::Straight;
    }

    let counts = RankCount::new(hand.cards());
    match counts.distinct() {
        2 if counts.has(4) => HandCategory::FourOfAKind,
        2 => HandCategory::FullHouse,
        3 if counts.has(3) => HandCategory::ThreeOfAKind,
        3 => HandCategory::TwoPair,
        4 => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    }
}

/// Stable sort by rank value with the aces high.
fn sort_high(hand: &Hand) -> Sorted {
    let cards = *hand.cards();
    let mut sorted = cards.map(|card| Valued {
        value: RankOrder::value(card.rank()),
        card,
    });
    sorted.sort_by_key(|v| v.value);
    sorted
}

/// Revalues the aces low and sorts again, suits are unchanged.
fn ace_low(sorted: &Sorted) -> Sorted {
    let mut flipped = *sorted;
    for v in flipped.iter_mut().filter(|v| v.card.rank() == Rank::Ace) {
        v.value = RankOrder::ACE_LOW;
    }
    flipped.sort_by_key(|v| v.value);
    flipped
}

fn is_flush(sorted: &Sorted) -> bool {
    let suit = sorted[0].card.suit();
    sorted.iter().all(|v| v.card.suit() == suit)
}

fn is_sequence(sorted: &Sorted) -> bool {
    sorted.windows(2).all(|w| w[0].value + 1 == w[1].value)
}

/// Returns the top card rank if the cards make a straight, trying the aces
/// low when the aces high don't.
fn straight_top(sorted: &Sorted) -> Option<Rank> {
    let top = sorted[Hand::SIZE - 1].card.rank();
    if is_sequence(sorted) {
        return Some(top);
    }

    if top == Rank::Ace {
        let flipped = ace_low(sorted);
        if is_sequence(&flipped) {
            return Some(flipped[Hand::SIZE - 1].card.rank());
        }
    }

    None
}
