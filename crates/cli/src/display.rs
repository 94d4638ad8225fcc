// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use hf_core::{Issue, IssueKind, State};
use serde::Serialize;

use crate::colors;

/// Format an issue as a single list line.
///
/// `- [issue] (open, @alice) #12: Crash on start`
pub fn format_issue_line(issue: &Issue, colorize: bool) -> String {
    let state = if colorize {
        colors::state(issue.state)
    } else {
        issue.state.to_string()
    };
    let status_display = match &issue.assignee {
        Some(assignee) => format!("{}, @{}", state, assignee.login),
        None => state,
    };
    format!(
        "- [{}] ({}) #{}: {}",
        issue.kind, status_display, issue.id, issue.title
    )
}

/// Format every field an issue carries, one per line.
pub fn format_issue_details(issue: &Issue) -> String {
    let mut output = vec![format!("#{}: {}", issue.id, issue.title)];
    output.push(format!("  Kind: {}", issue.kind));
    output.push(format!("  State: {}", issue.state));
    output.push(format!("  Author: {}", issue.author));
    if let Some(assignee) = &issue.assignee {
        output.push(format!("  Assignee: {}", assignee.login));
    }
    if let Some(milestone) = &issue.milestone {
        output.push(format!("  Milestone: {}", milestone.title));
    }
    if !issue.labels.is_empty() {
        let labels: Vec<&str> = issue.labels.iter().map(|l| l.full_name.as_str()).collect();
        output.push(format!("  Labels: {}", labels.join(", ")));
    }
    if let Some(parent) = issue.parent {
        output.push(format!("  Parent: #{}", parent));
    }
    output.push(format!(
        "  Updated: {}",
        issue.updated_at.format("%Y-%m-%d %H:%M")
    ));
    output.join("\n")
}

/// JSON representation of an issue for structured output.
#[derive(Debug, Serialize)]
pub struct IssueJson<'a> {
    pub id: u32,
    pub kind: IssueKind,
    pub state: State,
    pub title: &'a str,
    pub author: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<&'a str>,
    pub labels: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u32>,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Issue> for IssueJson<'a> {
    fn from(issue: &'a Issue) -> Self {
        IssueJson {
            id: issue.id,
            kind: issue.kind,
            state: issue.state,
            title: &issue.title,
            author: &issue.author,
            assignee: issue.assignee.as_ref().map(|u| u.login.as_str()),
            milestone: issue.milestone.as_ref().map(|m| m.title.as_str()),
            labels: issue.labels.iter().map(|l| l.full_name.as_str()).collect(),
            parent: issue.parent,
            comments: issue.comments,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
        }
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
