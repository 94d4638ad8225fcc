// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue ordering for `sort:` keys.

use std::cmp::Ordering;

use super::qualifier::SortKey;
use crate::issue::{Issue, EXCLUSIVE_DELIMITER};

/// Compares by each key in turn; the first non-equal key decides.
pub fn compare_issues(keys: &[SortKey], a: &Issue, b: &Issue) -> Ordering {
    keys.iter()
        .map(|key| key.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl SortKey {
    /// Compares two issues by this key.
    ///
    /// Unrecognised keys name a label group: issues are ordered by their
    /// labels in that group, and issues without one always sort last.
    pub fn compare(&self, a: &Issue, b: &Issue) -> Ordering {
        let ordering = match self.key.to_lowercase().as_str() {
            "id" => a.id.cmp(&b.id),
            "title" => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            "comments" => a.comments.cmp(&b.comments),
            "updated" | "date" => a.updated_at.cmp(&b.updated_at),
            "created" => a.created_at.cmp(&b.created_at),
            "milestone" => missing_last(milestone_key(a), milestone_key(b)),
            "assignee" => missing_last(assignee_key(a), assignee_key(b)),
            group => return compare_label_group(group, self.descending, a, b),
        };
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

fn milestone_key(issue: &Issue) -> Option<String> {
    issue.milestone.as_ref().map(|m| m.title.to_lowercase())
}

fn assignee_key(issue: &Issue) -> Option<String> {
    issue.assignee.as_ref().map(|u| u.login.to_lowercase())
}

fn missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorted, lower-cased names of the issue's labels in `group`.
fn group_labels(issue: &Issue, group: &str) -> Vec<String> {
    let mut names: Vec<String> = issue
        .labels
        .iter()
        .filter(|l| l.group().is_some_and(|g| g.eq_ignore_ascii_case(group)))
        .map(|l| l.name().to_lowercase())
        .collect();
    names.sort();
    names
}

fn compare_label_group(key: &str, descending: bool, a: &Issue, b: &Issue) -> Ordering {
    let group = key.strip_suffix(EXCLUSIVE_DELIMITER).unwrap_or(key);
    let a_labels = group_labels(a, group);
    let b_labels = group_labels(b, group);

    match (a_labels.is_empty(), b_labels.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let ordering = a_labels
        .len()
        .cmp(&b_labels.len())
        .then_with(|| a_labels.cmp(&b_labels));
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
