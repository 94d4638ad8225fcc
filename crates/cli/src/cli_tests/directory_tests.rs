// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::Parser;
use yare::parameterized;

#[parameterized(
    before_subcommand = { &["hf", "-C", "/tmp", "list"] },
    with_equals = { &["hf", "-C=/tmp", "list"] },
    no_space = { &["hf", "-C/tmp", "list"] },
    long_flag = { &["hf", "--directory", "/tmp", "list"] },
    after_subcommand = { &["hf", "list", "-C", "/tmp"] },
)]
fn parse_directory_flag(args: &[&str]) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.directory, Some("/tmp".to_string()));
}

#[test]
fn directory_defaults_to_none() {
    let cli = Cli::try_parse_from(["hf", "qualifiers"]).unwrap();
    assert_eq!(cli.directory, None);
}
