// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Classification results output.
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use pokerhand_eval::HandCategory;

/// The results output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `<hand>: <category>` line per hand.
    Text,
    /// One JSON object per hand.
    Json,
}

/// A JSON output row.
#[derive(Serialize)]
struct Row<'a> {
    line: usize,
    hand: &'a str,
    category: HandCategory,
}

/// Writes the classification results.
pub struct Report<W> {
    format: Format,
    out: W,
}

impl<W: Write> Report<W> {
    /// Creates a report that writes to `out`.
    pub fn new(format: Format, out: W) -> Self {
        Self { format, out }
    }

    /// Writes a classified hand.
    pub fn write(&mut self, line: usize, hand: &str, category: HandCategory) -> Result<()> {
        match self.format {
            Format::Text => writeln!(self.out, "{hand}: {category}")?,
            Format::Json => {
                let row = Row {
                    line,
                    hand,
                    category,
                };
                serde_json::to_writer(&mut self.out, &row)?;
                writeln!(self.out)?;
            }
        }

        Ok(())
    }

    /// Flushes the output.
    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
