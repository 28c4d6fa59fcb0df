// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example classify_all5
// ...
// Total hands      2598960
// Elapsed:         ...
// Hands/sec:       ...
//
// High card:       1302540
// One pair:        1098240
// Two pair:        123552
// Three of a kind: 54912
// Straight:        10200
// Flush:           5108
// Full house:      3744
// Four of a kind:  624
// Straight flush:  36
// Royal flush:     4
// ```

use std::time::Instant;

use pokerhand_eval::*;

fn main() {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];

    Deck::default().for_each(5, |cards| {
        if let Ok(hand) = Hand::try_from(cards) {
            counts[classify(&hand) as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
