// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::Parser;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

// ─────────────────────────────────────────────────────────────────────────────
// list
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn list_without_filter() {
    let cli = parse(&["hf", "list"]).unwrap();
    match cli.command {
        Command::List {
            filter,
            output,
            limits,
        } => {
            assert!(filter.filter.is_empty());
            assert_eq!(filter.joined(), "");
            assert_eq!(output, OutputFormat::Text);
            assert_eq!(limits.limit, None);
        }
        _ => panic!("expected list"),
    }
}

#[test]
fn list_joins_filter_words() {
    let cli = parse(&["hf", "list", "is:open", "label:bug"]).unwrap();
    match cli.command {
        Command::List { filter, .. } => assert_eq!(filter.joined(), "is:open label:bug"),
        _ => panic!("expected list"),
    }
}

#[parameterized(
    text = { "text", OutputFormat::Text },
    json = { "json", OutputFormat::Json },
    id = { "id", OutputFormat::Id },
    ids_alias = { "ids", OutputFormat::Id },
)]
fn list_output_formats(value: &str, expected: OutputFormat) {
    let cli = parse(&["hf", "list", "-o", value, "is:open"]).unwrap();
    match cli.command {
        Command::List { output, .. } => assert_eq!(output, expected),
        _ => panic!("expected list"),
    }
}

#[test]
fn list_options_after_filter() {
    let cli = parse(&["hf", "list", "is:open", "-n", "3", "--output", "json"]).unwrap();
    match cli.command {
        Command::List {
            filter,
            output,
            limits,
        } => {
            assert_eq!(filter.joined(), "is:open");
            assert_eq!(output, OutputFormat::Json);
            assert_eq!(limits.limit, Some(3));
        }
        _ => panic!("expected list"),
    }
}

#[test]
fn list_negation_after_double_dash() {
    let cli = parse(&["hf", "list", "--", "-label:bug"]).unwrap();
    match cli.command {
        Command::List { filter, .. } => assert_eq!(filter.joined(), "-label:bug"),
        _ => panic!("expected list"),
    }
}

#[test]
fn list_rejects_unknown_format() {
    assert!(parse(&["hf", "list", "-o", "yaml"]).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// apply / check / tokens
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn apply_takes_id_then_filter() {
    let cli = parse(&["hf", "apply", "12", "milestone:v1", "label:bug", "--dry-run"]).unwrap();
    match cli.command {
        Command::Apply {
            id,
            filter,
            dry_run,
        } => {
            assert_eq!(id, 12);
            assert_eq!(filter.joined(), "milestone:v1 label:bug");
            assert!(dry_run);
        }
        _ => panic!("expected apply"),
    }
}

#[test]
fn apply_rejects_non_numeric_id() {
    assert!(parse(&["hf", "apply", "abc", "label:bug"]).is_err());
}

#[test]
fn check_and_tokens_take_filters() {
    let cli = parse(&["hf", "check", "a", "OR", "b"]).unwrap();
    assert!(matches!(cli.command, Command::Check { filter } if filter.joined() == "a OR b"));

    let cli = parse(&["hf", "tokens", "label:bug"]).unwrap();
    assert!(matches!(cli.command, Command::Tokens { filter } if filter.joined() == "label:bug"));
}
