// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank values and rank multiplicities.
use ahash::AHashMap;

use pokerhand_cards::{Card, Rank};

/// Numeric ordering of the ranks.
///
/// Ranks map to 2 (deuce) through 14 (ace), the ace can also be valued
/// [RankOrder::ACE_LOW] when checking for the A-2-3-4-5 straight.
#[derive(Debug, Clone, Copy)]
pub struct RankOrder;

impl RankOrder {
    /// The value of an ace played low.
    pub const ACE_LOW: u8 = 1;

    /// Returns the value of a rank, an ace is valued high.
    pub const fn value(rank: Rank) -> u8 {
        rank as u8 + 2
    }
}

/// Number of cards for each rank in a hand.
#[derive(Debug, Clone, Default)]
pub struct RankCount(AHashMap<Rank, u8>);

impl RankCount {
    /// Counts the ranks of the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = AHashMap::with_capacity(cards.len());
        for card in cards {
            *counts.entry(card.rank()).or_insert(0) += 1;
        }

        Self(counts)
    }

    /// Number of cards with the given rank, zero if the rank is missing.
    pub fn count(&self, rank: Rank) -> u8 {
        self.0.get(&rank).copied().unwrap_or(0)
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Checks if any rank occurs exactly `n` times.
    pub fn has(&self, n: u8) -> bool {
        self.0.values().any(|&count| count == n)
    }
}
