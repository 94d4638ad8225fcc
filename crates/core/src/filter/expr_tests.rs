// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::filter::parse;
use crate::filter::QualifierContent;

fn q(name: &str, text: &str) -> FilterExpr {
    Qualifier::new(name, QualifierContent::text(text))
        .unwrap()
        .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tree queries
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn qualifier_names_in_order() {
    let expr = parse("label:a -status:open (crash OR in:title)").unwrap();
    assert_eq!(
        expr.qualifier_names(),
        vec!["label", "status", "keyword", "in"]
    );
    assert_eq!(
        expr.qualifier_types(),
        vec![
            QualifierType::Label,
            QualifierType::State,
            QualifierType::Keyword,
            QualifierType::In
        ]
    );
}

#[test]
fn find_collects_matches() {
    let expr = parse("in:title crash sort:id -in:body").unwrap();
    let found = expr.find(Qualifier::is_meta);
    let names: Vec<&str> = found.iter().map(|q| q.name()).collect();
    assert_eq!(names, vec!["in", "sort", "in"]);
}

#[test]
fn filter_replaces_and_collapses() {
    let expr = parse("in:title crash").unwrap();
    assert_eq!(expr.filter(|q| !q.is_meta()), Qualifier::keyword("crash").into());

    let expr = parse("label:a OR in:title").unwrap();
    assert_eq!(expr.filter(|q| !q.is_meta()), q("label", "a"));

    let expr = parse("-in:title").unwrap();
    assert_eq!(expr.filter(|q| !q.is_meta()), FilterExpr::EMPTY);

    let expr = parse("in:title sort:id").unwrap();
    assert!(expr.filter(|q| !q.is_meta()).is_empty());
}

#[test]
fn filter_keeps_shape() {
    let expr = parse("a -(b OR c) d").unwrap();
    assert_eq!(expr.filter(|_| true), expr);
}

#[test]
fn empty_checks() {
    assert!(FilterExpr::EMPTY.is_empty());
    assert!(FilterExpr::default().is_empty());
    assert!(FilterExpr::not(FilterExpr::EMPTY).is_empty());
    assert!(!parse("a").unwrap().is_empty());
    assert_eq!(FilterExpr::EMPTY.to_string(), "");
}

// ─────────────────────────────────────────────────────────────────────────────
// Applicability
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn duplicate_assignees_are_not_applicable() {
    let expr = FilterExpr::and(q("assignee", "a"), q("assignee", "b"));
    assert!(!expr.can_be_applied());
}

#[test]
fn duplicate_labels_are_applicable() {
    let expr = FilterExpr::and(q("label", "a"), q("label", "b"));
    assert!(expr.can_be_applied());
}

#[test]
fn connectives_are_not_applicable() {
    assert!(!FilterExpr::or(q("label", "a"), q("label", "b")).can_be_applied());
    assert!(!FilterExpr::not(q("label", "a")).can_be_applied());
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn display_parenthesises_right_nested_conjunction() {
    let expr = FilterExpr::and(
        q("label", "a"),
        FilterExpr::and(q("label", "b"), q("label", "c")),
    );
    assert_eq!(expr.to_string(), "label:a (label:b label:c)");
}

#[test]
fn display_negated_conjunction() {
    let expr = FilterExpr::not(FilterExpr::and(q("label", "a"), q("label", "b")));
    assert_eq!(expr.to_string(), "NOT (label:a label:b)");
}

#[test]
fn display_disjunction_always_parenthesised() {
    let expr = FilterExpr::or(
        FilterExpr::or(q("label", "a"), q("label", "b")),
        q("label", "c"),
    );
    assert_eq!(expr.to_string(), "((label:a OR label:b) OR label:c)");
    assert_eq!(parse(&expr.to_string()).unwrap(), expr);
}
