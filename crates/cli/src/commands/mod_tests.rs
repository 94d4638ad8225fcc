// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn config_with(filters: &[(&str, &str)]) -> Config {
    let mut config = Config::default();
    for (name, filter) in filters {
        config
            .add_filter(name, (*filter).to_string(), false)
            .unwrap();
    }
    config
}

#[parameterized(
    no_reference = { "is:open label:bug", "is:open label:bug" },
    whole = { "@mine", "(assignee:alice)" },
    combined = { "@mine is:open", "(assignee:alice) is:open" },
    negated = { "!@mine", "!(assignee:alice)" },
    two = { "@mine OR @bugs", "(assignee:alice) OR (label:bug)" },
    inside_brackets = { "(@bugs)", "((label:bug))" },
    bare_at = { "a @ b", "a @ b" },
    empty_saved = { "@all is:open", " is:open" },
)]
fn expand_saved_cases(input: &str, expected: &str) {
    let config = config_with(&[
        ("mine", "assignee:alice"),
        ("bugs", "label:bug"),
        ("all", ""),
    ]);
    assert_eq!(expand_saved(input, &config).unwrap(), expected);
}

#[test]
fn expand_unknown_saved_filter() {
    let err = expand_saved("@nope", &Config::default()).unwrap_err();
    assert!(matches!(err, Error::SavedFilterNotFound(name) if name == "nope"));
}

#[test]
fn expanded_filter_parses() {
    let config = config_with(&[("mine", "assignee:alice OR label:bug")]);
    let expanded = expand_saved("@mine is:open", &config).unwrap();
    let expr = hf_core::parse(&expanded).unwrap();
    assert_eq!(expr.to_string(), "(assignee:alice OR label:bug) is:open");
}

#[test]
fn resolve_without_reference_needs_no_project() {
    assert_eq!(resolve_filter("label:bug").unwrap(), "label:bug");
}
