// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Qualifiers: the leaves of a filter expression.
//!
//! A qualifier is a name plus exactly one typed content value, e.g.
//! `label:bug`, `created:>2020-01-01` or `sort:~updated,id`. The name
//! determines how the qualifier is evaluated and applied; see the `eval`
//! and `apply` modules.

use std::fmt;

use chrono::NaiveDate;

use super::lexer::is_single_symbol;
use super::range::{DateRange, NumberRange};
use crate::error::{Error, Result};

/// The recognised kinds of qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualifierType {
    /// Matches everything; serialises to the empty string.
    Empty,
    /// An unrecognised name. Never matches.
    False,
    Keyword,
    Id,
    Title,
    Body,
    Milestone,
    Parent,
    Label,
    Author,
    Assignee,
    Involves,
    Type,
    State,
    Has,
    No,
    Is,
    Created,
    Updated,
    Sort,
    In,
}

/// Recognised names, canonical name first for each type.
const NAMES: &[(&str, QualifierType)] = &[
    ("id", QualifierType::Id),
    ("keyword", QualifierType::Keyword),
    ("title", QualifierType::Title),
    ("body", QualifierType::Body),
    ("desc", QualifierType::Body),
    ("description", QualifierType::Body),
    ("milestone", QualifierType::Milestone),
    ("m", QualifierType::Milestone),
    ("parent", QualifierType::Parent),
    ("label", QualifierType::Label),
    ("author", QualifierType::Author),
    ("creator", QualifierType::Author),
    ("assignee", QualifierType::Assignee),
    ("as", QualifierType::Assignee),
    ("involves", QualifierType::Involves),
    ("user", QualifierType::Involves),
    ("type", QualifierType::Type),
    ("state", QualifierType::State),
    ("status", QualifierType::State),
    ("has", QualifierType::Has),
    ("no", QualifierType::No),
    ("is", QualifierType::Is),
    ("created", QualifierType::Created),
    ("updated", QualifierType::Updated),
    ("sort", QualifierType::Sort),
    ("in", QualifierType::In),
];

impl QualifierType {
    /// Looks up a qualifier name, ignoring case. Unknown names are `False`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
            .unwrap_or(QualifierType::False)
    }

    /// The canonical name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            QualifierType::Empty => "",
            QualifierType::False => "false",
            kind => NAMES
                .iter()
                .find(|(_, k)| k == kind)
                .map(|(n, _)| *n)
                .unwrap_or(""),
        }
    }

    /// Every recognised qualifier name, aliases included, for completion.
    pub fn completion_keywords() -> Vec<&'static str> {
        NAMES.iter().map(|(n, _)| *n).collect()
    }

    /// Aliases of this type other than its canonical name.
    pub fn aliases(&self) -> Vec<&'static str> {
        NAMES
            .iter()
            .filter(|(n, k)| k == self && *n != self.as_str())
            .map(|(n, _)| *n)
            .collect()
    }

    /// Every type a user can name, in display order.
    pub fn named() -> Vec<QualifierType> {
        let mut kinds: Vec<QualifierType> = Vec::new();
        for (_, kind) in NAMES {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }

    /// Human-readable description of the content this type accepts.
    pub fn valid_inputs(&self) -> &'static str {
        match self {
            QualifierType::Id => "issue number, #number, or a number range (id:1..5 is text)",
            QualifierType::Keyword | QualifierType::Title | QualifierType::Body => {
                "any text; quote to include spaces"
            }
            QualifierType::Milestone => "part of a milestone title",
            QualifierType::Parent => "issue number or #number; matches descendants too",
            QualifierType::Label => "label name, group.name, group-name, or group.",
            QualifierType::Author | QualifierType::Assignee | QualifierType::Involves => {
                "part of a login, display name or alias"
            }
            QualifierType::Type => "issue or pr",
            QualifierType::State => "open or closed",
            QualifierType::Has | QualifierType::No => "label, milestone, assignee or parent",
            QualifierType::Is => "open, closed, pr, issue, merged or unmerged",
            QualifierType::Created => "date (YYYY-MM-DD), date .. date, or <, <=, >, >= date",
            QualifierType::Updated => "hours since update: N (< N), N .. M, or <, <=, >, >= N",
            QualifierType::Sort => "comma-separated keys; prefix ~ to reverse",
            QualifierType::In => "title or body; restricts bare keywords",
            QualifierType::Empty | QualifierType::False => "",
        }
    }

    /// True for qualifiers that change how siblings are evaluated.
    pub fn is_meta(&self) -> bool {
        matches!(self, QualifierType::In | QualifierType::Sort)
    }

    /// True if an issue can be changed to satisfy this type of qualifier.
    pub fn is_applicable(&self) -> bool {
        matches!(
            self,
            QualifierType::Milestone
                | QualifierType::Label
                | QualifierType::Assignee
                | QualifierType::State
                | QualifierType::Parent
                | QualifierType::In
                | QualifierType::Sort
                | QualifierType::Empty
        )
    }
}

impl fmt::Display for QualifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One key of a `sort:` qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub key: String,
    pub descending: bool,
}

impl SortKey {
    pub fn new(key: impl Into<String>, descending: bool) -> Self {
        SortKey {
            key: key.into(),
            descending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "~{}", self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// The typed content of a qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QualifierContent {
    Text(String),
    Date(NaiveDate),
    DateRange(DateRange),
    Number(i64),
    NumberRange(NumberRange),
    SortKeys(Vec<SortKey>),
}

impl QualifierContent {
    pub fn text(text: impl Into<String>) -> Self {
        QualifierContent::Text(text.into())
    }

    /// Content as text, for qualifiers that match on strings.
    ///
    /// Numbers are given in their decimal form, so `milestone:1` still
    /// searches for "1".
    pub fn as_text(&self) -> Option<String> {
        match self {
            QualifierContent::Text(text) => Some(text.clone()),
            QualifierContent::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Text needs quoting unless it re-lexes as the same single symbol and
/// would not be read back as a number.
fn needs_quotes(text: &str) -> bool {
    text.parse::<i64>().is_ok() || !is_single_symbol(text)
}

impl fmt::Display for QualifierContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualifierContent::Text(text) if needs_quotes(text) => write!(f, "\"{text}\""),
            QualifierContent::Text(text) => write!(f, "{text}"),
            QualifierContent::Date(date) => write!(f, "{date}"),
            QualifierContent::DateRange(range) => write!(f, "{range}"),
            QualifierContent::Number(n) => write!(f, "{n}"),
            QualifierContent::NumberRange(range) => write!(f, "{range}"),
            QualifierContent::SortKeys(keys) => {
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{key}")?;
                }
                Ok(())
            }
        }
    }
}

/// A named predicate with typed content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    name: String,
    kind: QualifierType,
    content: QualifierContent,
}

impl Qualifier {
    /// Satisfied by every issue.
    pub const EMPTY: Qualifier = Qualifier {
        name: String::new(),
        kind: QualifierType::Empty,
        content: QualifierContent::Text(String::new()),
    };

    /// Builds a qualifier from a name as typed and its content.
    ///
    /// `sort` takes sort keys and nothing else takes sort keys.
    pub fn new(name: &str, content: QualifierContent) -> Result<Self> {
        let name = name.trim().to_lowercase();
        let kind = QualifierType::from_name(&name);
        let is_sort_keys = matches!(content, QualifierContent::SortKeys(_));
        if (kind == QualifierType::Sort) != is_sort_keys {
            return Err(Error::Semantic(format!(
                "qualifier {name} cannot take content {content}"
            )));
        }
        Ok(Qualifier {
            name,
            kind,
            content,
        })
    }

    /// A bare search term.
    pub fn keyword(text: impl Into<String>) -> Self {
        Qualifier {
            name: QualifierType::Keyword.as_str().to_string(),
            kind: QualifierType::Keyword,
            content: QualifierContent::Text(text.into()),
        }
    }

    /// Name as typed, lower-cased.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> QualifierType {
        self.kind
    }

    pub fn content(&self) -> &QualifierContent {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.kind == QualifierType::Empty
    }

    pub fn is_meta(&self) -> bool {
        self.kind.is_meta()
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            QualifierType::Empty => Ok(()),
            QualifierType::Keyword => write!(f, "{}", self.content),
            _ => write!(f, "{}:{}", self.name, self.content),
        }
    }
}

#[cfg(test)]
#[path = "qualifier_tests.rs"]
mod tests;
