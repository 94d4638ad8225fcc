// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for command tests.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use hf_core::{Issue, IssueKind, Label, Milestone, Model, State, User};

/// Reference time the fixture's update times are relative to.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap()
}

fn day(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, month, day, 9, 0, 0).unwrap()
}

fn milestone(number: u32, title: &str) -> Milestone {
    Milestone {
        number,
        title: title.to_string(),
        due_on: None,
        open: true,
    }
}

fn labels(names: &[&str]) -> Vec<Label> {
    names.iter().map(|n| Label::new(*n)).collect()
}

/// Four issues:
///
/// - #1 open bug in v1.0, assigned to bob, updated two hours ago
/// - #2 open feature in v1.1, updated two days ago
/// - #3 merged docs PR under #1, assigned to alice
/// - #4 open bug under #3
pub fn sample_model() -> Model {
    let issue = |id: u32, title: &str| Issue {
        id,
        title: title.to_string(),
        body: String::new(),
        author: "alice".to_string(),
        created_at: day(id, 10),
        updated_at: day(5, 1),
        state: State::Open,
        kind: IssueKind::Issue,
        assignee: None,
        milestone: None,
        labels: Vec::new(),
        parent: None,
        comments: 0,
    };

    let mut one = issue(1, "Crash on start");
    one.body = "Crashes when the config file is missing".to_string();
    one.labels = labels(&["type.bug", "area-ui"]);
    one.milestone = Some(milestone(1, "v1.0"));
    one.assignee = Some(User::new("bob"));
    one.updated_at = now() - Duration::hours(2);
    one.comments = 5;

    let mut two = issue(2, "Add dark mode");
    two.author = "bob".to_string();
    two.labels = labels(&["type.feature", "area-ui"]);
    two.milestone = Some(milestone(2, "v1.1"));
    two.updated_at = now() - Duration::hours(48);
    two.comments = 1;

    let mut three = issue(3, "Fix typo in docs");
    three.author = "carol".to_string();
    three.state = State::Closed;
    three.kind = IssueKind::PullRequest;
    three.labels = labels(&["docs"]);
    three.assignee = Some(User::new("alice"));
    three.parent = Some(1);

    let mut four = issue(4, "Crash when saving");
    four.labels = labels(&["type.bug"]);
    four.parent = Some(3);
    four.comments = 2;

    Model {
        issues: vec![one, two, three, four],
        labels: labels(&["type.bug", "type.feature", "area-ui", "area-db", "docs"]),
        milestones: vec![
            milestone(1, "v1.0"),
            milestone(2, "v1.1"),
            milestone(3, "v2.0"),
        ],
        users: vec![
            User {
                login: "alice".into(),
                name: Some("Alice Smith".into()),
                alias: None,
            },
            User::new("bob"),
            User::new("carol"),
        ],
    }
}
