// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::sample_model;
use hf_core::{Label, State};

fn apply_str(model: &mut Model, id: u32, filter: &str) -> Result<Outcome> {
    let expr = hf_core::parse(filter).unwrap();
    apply(model, id, &expr, true)
}

fn updated(outcome: Outcome) -> Issue {
    match outcome {
        Outcome::Updated(issue) => issue,
        Outcome::Unchanged => panic!("expected an update"),
    }
}

#[test]
fn exclusive_label_replaces_group() {
    let mut model = sample_model();
    let issue = updated(apply_str(&mut model, 1, "label:type.feature").unwrap());
    assert_eq!(
        issue.labels,
        vec![Label::new("area-ui"), Label::new("type.feature")]
    );
    assert_eq!(model.issue(1).unwrap(), &issue);
}

#[test]
fn conjunction_sets_several_fields() {
    let mut model = sample_model();
    let issue = updated(apply_str(&mut model, 2, "milestone:v2 assignee:carol state:closed").unwrap());
    assert_eq!(issue.milestone.unwrap().title, "v2.0");
    assert_eq!(issue.assignee.unwrap().login, "carol");
    assert_eq!(issue.state, State::Closed);
}

#[test]
fn parent_by_number() {
    let mut model = sample_model();
    let issue = updated(apply_str(&mut model, 2, "parent:#1").unwrap());
    assert_eq!(issue.parent, Some(1));
}

#[test]
fn already_matching_is_unchanged() {
    let mut model = sample_model();
    let before = model.clone();
    assert_eq!(
        apply_str(&mut model, 4, "label:type.bug").unwrap(),
        Outcome::Unchanged
    );
    assert_eq!(model, before);
}

#[test]
fn dry_run_leaves_model_untouched() {
    let mut model = sample_model();
    let before = model.clone();
    let expr = hf_core::parse("milestone:v2").unwrap();
    let issue = updated(apply(&mut model, 2, &expr, false).unwrap());
    assert_eq!(issue.milestone.unwrap().title, "v2.0");
    assert_eq!(model, before);
}

#[test]
fn immutable_field_leaves_model_untouched() {
    let mut model = sample_model();
    let before = model.clone();
    let err = apply_str(&mut model, 2, "milestone:v2 title:renamed").unwrap_err();
    assert!(matches!(err, Error::Filter(hf_core::Error::Immutable { .. })));
    assert_eq!(model, before);
}

#[test]
fn failed_conjunction_leaves_model_untouched() {
    let mut model = sample_model();
    let before = model.clone();
    let err = apply_str(&mut model, 2, "milestone:v2 label:zzz").unwrap_err();
    assert!(matches!(err, Error::Filter(hf_core::Error::NoMatch { .. })));
    assert!(err.to_string().contains("invalid labels 'zzz'"));
    assert_eq!(model, before);
}

#[test]
fn ambiguous_milestone() {
    let mut model = sample_model();
    let err = apply_str(&mut model, 2, "milestone:v1").unwrap_err();
    assert!(matches!(
        err,
        Error::Filter(hf_core::Error::AmbiguousMatch { .. })
    ));
    assert!(err.to_string().contains("v1.0, v1.1"));
}

#[test]
fn parent_cycle_rejected() {
    let mut model = sample_model();
    let err = apply_str(&mut model, 1, "parent:4").unwrap_err();
    assert!(matches!(
        err,
        Error::Filter(hf_core::Error::InvalidContent { field: "parent", .. })
    ));
}

#[test]
fn disjunction_not_applicable() {
    let mut model = sample_model();
    let err = apply_str(&mut model, 1, "label:bug OR label:docs").unwrap_err();
    assert!(matches!(err, Error::NotApplicable(_)));
}

#[test]
fn duplicate_kind_not_applicable() {
    let mut model = sample_model();
    let err = apply_str(&mut model, 1, "milestone:v1.0 m:v2").unwrap_err();
    assert!(matches!(err, Error::NotApplicable(_)));
}

#[test]
fn empty_filter_not_applicable() {
    let mut model = sample_model();
    let err = apply_str(&mut model, 1, "").unwrap_err();
    assert!(matches!(err, Error::NotApplicable(_)));
}

#[test]
fn missing_issue() {
    let mut model = sample_model();
    let err = apply_str(&mut model, 99, "label:docs").unwrap_err();
    assert!(matches!(err, Error::IssueNotFound(99)));
}

#[test]
fn inapplicable_qualifier_reports_reason() {
    let mut model = sample_model();
    let err = apply_str(&mut model, 1, "id:3").unwrap_err();
    assert!(err.to_string().contains("id is immutable"));

    let err = apply_str(&mut model, 1, "milestone:v2 is:open").unwrap_err();
    assert!(matches!(
        err,
        Error::Filter(hf_core::Error::AmbiguousQualifier { .. })
    ));
}
