// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use pokerhand_cards::ParseError;
use pokerhand_cli::{Config, Error, Format, process, read_input, run};
use pokerhand_eval::HandCategory;

const HANDS_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/hands.txt");

fn output(text: &str, config: &Config) -> Result<String, Error> {
    let mut out = Vec::new();
    process(text, config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn classify_file() {
    let config = Config {
        input: Some(HANDS_FILE.to_string()),
        ..Config::default()
    };

    let mut out = Vec::new();
    let summary = run(&config, &mut out).unwrap();
    assert_eq!(summary.total(), 11);
    assert_eq!(summary.invalid(), 0);
    assert_eq!(summary.count(HandCategory::StraightFlush), 2);

    let out = String::from_utf8(out).unwrap();
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        [
            "AH KH QH JH TH: Royal flush",
            "9H 8H 7H 6H 5H: Straight flush",
            "AH 2H 3H 4H 5H: Straight flush",
            "2H 2S 2C 2D 5H: Four of a kind",
            "2H 2S 2C 5D 5H: Full house",
            "2C 9C 4C KC 7C: Flush",
            "AH 2S 3C 4D 5S: Straight",
            "7H 7S 7C 5D 2H: Three of a kind",
            "7H 7S 5C 5D 2H: Two pair",
            "AH 9S 5C AD 2H: One pair",
            "2H 3S 4C 5D 7H: High card",
        ]
    );
}

#[test]
fn parallel_output_matches() {
    let text = read_input(HANDS_FILE).unwrap();
    let expected = output(&text, &Config::default()).unwrap();

    for tasks in [2, 3, 64] {
        let config = Config {
            tasks,
            ..Config::default()
        };
        assert_eq!(output(&text, &config).unwrap(), expected);
    }
}

#[test]
fn missing_input() {
    let err = run(&Config::default(), Vec::new()).unwrap_err();
    assert!(matches!(err, Error::Usage));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unreadable_input() {
    let config = Config {
        input: Some("no/such/hands.txt".to_string()),
        ..Config::default()
    };

    let err = run(&config, Vec::new()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().starts_with("cannot read no/such/hands.txt"));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn invalid_hand_stops() {
    let text = "AH KH QH JH TH\n2X 3H 4H 5H 6H\n2H 3S 4C 5D 7H\n7H 7S 5C 5Q 2H\n";

    let mut out = Vec::new();
    let err = process(text, &Config::default(), &mut out).unwrap_err();

    match &err {
        Error::InvalidHand { line, hand, source } => {
            assert_eq!(*line, 2);
            assert_eq!(hand, "2X 3H 4H 5H 6H");
            assert_eq!(
                source,
                &ParseError::InvalidSuit {
                    suit: 'X',
                    token: "2X".to_string()
                }
            );
        }
        _ => panic!("unexpected error {err:?}"),
    }

    assert_eq!(err.exit_code(), 4);
    assert!(err.to_string().contains("'2X 3H 4H 5H 6H'"));

    // No partial results.
    assert!(out.is_empty());
}

#[test]
fn keep_going_skips_invalid() {
    let text = "AH KH QH JH TH\n2X 3H 4H 5H 6H\nAH KH QH\n2H 3S 4C 5D 7H\n";
    let config = Config {
        keep_going: true,
        ..Config::default()
    };

    let mut out = Vec::new();
    let summary = process(text, &config, &mut out).unwrap();
    assert_eq!(summary.total(), 4);
    assert_eq!(summary.invalid(), 2);

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "AH KH QH JH TH: Royal flush\n2H 3S 4C 5D 7H: High card\n"
    );
}

#[test]
fn json_output() {
    let config = Config {
        format: Format::Json,
        ..Config::default()
    };

    let out = output("\nAH 2S 3C 4D 5S\n", &config).unwrap();
    let row = serde_json::from_str::<serde_json::Value>(out.trim_end()).unwrap();

    assert_eq!(row["line"], 2);
    assert_eq!(row["hand"], "AH 2S 3C 4D 5S");
    assert_eq!(row["category"], "Straight");
}

#[test]
fn empty_input() {
    assert_eq!(output("", &Config::default()).unwrap(), "");
    assert_eq!(output("\n\n", &Config::default()).unwrap(), "");
}
