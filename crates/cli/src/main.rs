// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use log::error;
use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use pokerhand_cli::{Config, Format};

#[derive(Debug, Parser)]
#[command(version, about = "Classifies five cards poker hands, one hand per line.")]
struct Cli {
    /// The hands file, use - to read from stdin.
    input: Option<String>,
    /// The output format.
    #[clap(long, short, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Skip invalid hands instead of stopping at the first one.
    #[clap(long, short)]
    keep_going: bool,
    /// Number of classification tasks.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Log each hand and the categories summary.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        input: cli.input,
        format: cli.format,
        keep_going: cli.keep_going,
        tasks: cli.tasks as usize,
    };

    let out = BufWriter::new(io::stdout().lock());
    match pokerhand_cli::run(&config, out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
