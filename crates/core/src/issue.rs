// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types.
//!
//! This module contains the data that filters are evaluated against: Issue,
//! State, IssueKind, Label, Milestone and User.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Delimiter that places a label in an exclusive group (`priority.high`).
pub const EXCLUSIVE_DELIMITER: char = '.';
/// Delimiter that places a label in a non-exclusive group (`area-ui`).
pub const NONEXCLUSIVE_DELIMITER: char = '-';

/// Whether an issue is open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    #[default]
    Open,
    Closed,
}

impl State {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Open => "open",
            State::Closed => "closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, State::Open)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(State::Open),
            "closed" => Ok(State::Closed),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// Plain issue or pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    #[default]
    Issue,
    PullRequest,
}

impl IssueKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Issue => "issue",
            IssueKind::PullRequest => "pr",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "issue" => Ok(IssueKind::Issue),
            "pr" | "pullrequest" | "pull_request" => Ok(IssueKind::PullRequest),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

/// A repository label, stored by its full name.
///
/// Names of the form `group.name` or `group-name` belong to a group. The
/// first delimiter splits the name, and only when at least one
/// non-delimiter character precedes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label {
    pub full_name: String,
}

impl Label {
    pub fn new(full_name: impl Into<String>) -> Self {
        Label {
            full_name: full_name.into(),
        }
    }

    /// Splits a label name into `(group, name, delimiter)`.
    ///
    /// Returns `None` when the name has no group.
    pub fn parse_name(full_name: &str) -> Option<(&str, &str, char)> {
        let pos = full_name.find([EXCLUSIVE_DELIMITER, NONEXCLUSIVE_DELIMITER])?;
        if pos == 0 {
            return None;
        }
        let delimiter = if full_name[pos..].starts_with(EXCLUSIVE_DELIMITER) {
            EXCLUSIVE_DELIMITER
        } else {
            NONEXCLUSIVE_DELIMITER
        };
        Some((&full_name[..pos], &full_name[pos + 1..], delimiter))
    }

    /// The group part, if the label belongs to one.
    pub fn group(&self) -> Option<&str> {
        Label::parse_name(&self.full_name).map(|(group, _, _)| group)
    }

    /// The name without its group prefix.
    pub fn name(&self) -> &str {
        Label::parse_name(&self.full_name)
            .map(|(_, name, _)| name)
            .unwrap_or(&self.full_name)
    }

    /// True if the label is in a group where an issue may carry only one label.
    pub fn is_exclusive(&self) -> bool {
        matches!(
            Label::parse_name(&self.full_name),
            Some((_, _, EXCLUSIVE_DELIMITER))
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

/// A repository milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub open: bool,
}

fn default_true() -> bool {
    true
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// A repository collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    /// Display name, if the user set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Locally configured alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl User {
    pub fn new(login: impl Into<String>) -> Self {
        User {
            login: login.into(),
            name: None,
            alias: None,
        }
    }

    /// Case-insensitive substring match on login, display name or alias.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.login, needle)
            || self
                .name
                .as_deref()
                .is_some_and(|n| contains_ignore_case(n, needle))
            || self
                .alias
                .as_deref()
                .is_some_and(|a| contains_ignore_case(a, needle))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.login)
    }
}

/// An issue or pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Login of the user who opened the issue.
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub state: State,
    #[serde(default)]
    pub kind: IssueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    /// Id of the parent issue, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u32>,
    #[serde(default)]
    pub comments: u32,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_pull_request(&self) -> bool {
        self.kind == IssueKind::PullRequest
    }

    /// Adds a label, replacing any label of the same exclusive group.
    ///
    /// Adding a label the issue already carries is a no-op.
    pub fn add_label(&mut self, label: Label) {
        if self.labels.contains(&label) {
            return;
        }
        if label.is_exclusive() {
            if let Some(group) = label.group() {
                let group = group.to_lowercase();
                self.labels
                    .retain(|l| l.group().map(str::to_lowercase).as_deref() != Some(group.as_str()));
            }
        }
        self.labels.push(label);
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.title)
    }
}

/// Case-insensitive substring test; `needle` must already be lower-cased.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
