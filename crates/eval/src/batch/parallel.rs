// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel batch evaluation.
use std::thread;

use super::{Evaluation, hands};

/// Evaluates all the hands in `text` using `num_tasks` parallel tasks.
///
/// Each task gets a contiguous range of lines so that the evaluations are
/// returned in input order, same as [evaluate](super::evaluate).
///
/// Panics if `num_tasks` is zero.
pub fn par_evaluate(text: &str, num_tasks: usize) -> Vec<Evaluation<'_>> {
    assert!(num_tasks > 0);

    let hands = hands(text).collect::<Vec<_>>();
    if hands.is_empty() {
        return Vec::new();
    }

    let hands_per_task = hands.len().div_ceil(num_tasks);
    let mut evals = vec![None; hands.len()];

    thread::scope(|s| {
        for (hands, evals) in hands
            .chunks(hands_per_task)
            .zip(evals.chunks_mut(hands_per_task))
        {
            s.spawn(move || {
                for (&(line, hand), eval) in hands.iter().zip(evals) {
                    *eval = Some(Evaluation::new(line, hand));
                }
            });
        }
    });

    evals.into_iter().flatten().collect()
}
