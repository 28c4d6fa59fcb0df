// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! The classifier sorts the cards by [RankOrder], checks for flushes and
//! sequences, with a second ace-low pass for the A-2-3-4-5 wheel, and falls
//! back to the [RankCount] multiplicities for pairs, trips, quads and full
//! houses.

mod classify;
pub use classify::{HandCategory, classify};

mod order;
pub use order::{RankCount, RankOrder};
