// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The filter expression tree.

use std::fmt;

use super::qualifier::{Qualifier, QualifierType};

/// A parsed filter.
///
/// Qualifiers are combined with conjunction (`a b`, `a AND b`), disjunction
/// (`a OR b`, `label:a;b`) and negation (`-a`, `NOT a`). The string form
/// produced by `Display` parses back to an equal tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterExpr {
    Qualifier(Qualifier),
    Conjunction(Box<FilterExpr>, Box<FilterExpr>),
    Disjunction(Box<FilterExpr>, Box<FilterExpr>),
    Negation(Box<FilterExpr>),
}

impl FilterExpr {
    /// The filter that matches everything.
    pub const EMPTY: FilterExpr = FilterExpr::Qualifier(Qualifier::EMPTY);

    pub fn and(left: FilterExpr, right: FilterExpr) -> Self {
        FilterExpr::Conjunction(Box::new(left), Box::new(right))
    }

    pub fn or(left: FilterExpr, right: FilterExpr) -> Self {
        FilterExpr::Disjunction(Box::new(left), Box::new(right))
    }

    pub fn not(expr: FilterExpr) -> Self {
        FilterExpr::Negation(Box::new(expr))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FilterExpr::Qualifier(q) => q.is_empty(),
            FilterExpr::Negation(inner) => inner.is_empty(),
            FilterExpr::Conjunction(..) | FilterExpr::Disjunction(..) => false,
        }
    }

    /// Every qualifier in the tree, left to right.
    pub fn qualifiers(&self) -> Vec<&Qualifier> {
        self.find(|_| true)
    }

    /// Names of every qualifier in the tree, as typed.
    pub fn qualifier_names(&self) -> Vec<&str> {
        self.qualifiers().into_iter().map(Qualifier::name).collect()
    }

    pub fn qualifier_types(&self) -> Vec<QualifierType> {
        self.qualifiers().into_iter().map(Qualifier::kind).collect()
    }

    /// Keeps only the qualifiers matching `pred`.
    ///
    /// Non-matching qualifiers become EMPTY and connectives with an EMPTY
    /// side collapse to the other side, so filtering out every qualifier
    /// yields EMPTY.
    pub fn filter(&self, pred: impl Fn(&Qualifier) -> bool) -> FilterExpr {
        self.filter_by(&pred)
    }

    fn filter_by(&self, pred: &dyn Fn(&Qualifier) -> bool) -> FilterExpr {
        match self {
            FilterExpr::Qualifier(q) if pred(q) => self.clone(),
            FilterExpr::Qualifier(_) => FilterExpr::EMPTY,
            FilterExpr::Conjunction(left, right) => {
                collapse(left.filter_by(pred), right.filter_by(pred), FilterExpr::and)
            }
            FilterExpr::Disjunction(left, right) => {
                collapse(left.filter_by(pred), right.filter_by(pred), FilterExpr::or)
            }
            FilterExpr::Negation(inner) => {
                let inner = inner.filter_by(pred);
                if inner.is_empty() {
                    FilterExpr::EMPTY
                } else {
                    FilterExpr::not(inner)
                }
            }
        }
    }

    /// Collects the qualifiers matching `pred`, left to right.
    pub fn find(&self, pred: impl Fn(&Qualifier) -> bool) -> Vec<&Qualifier> {
        let mut found = Vec::new();
        self.find_into(&pred, &mut found);
        found
    }

    fn find_into<'a>(&'a self, pred: &dyn Fn(&Qualifier) -> bool, found: &mut Vec<&'a Qualifier>) {
        match self {
            FilterExpr::Qualifier(q) => {
                if pred(q) {
                    found.push(q);
                }
            }
            FilterExpr::Conjunction(left, right) | FilterExpr::Disjunction(left, right) => {
                left.find_into(pred, found);
                right.find_into(pred, found);
            }
            FilterExpr::Negation(inner) => inner.find_into(pred, found),
        }
    }

    /// True if applying this filter to an issue is meaningful.
    ///
    /// A conjunction is applicable when every child is and no qualifier type
    /// other than `label` appears twice: `assignee:a assignee:b` cannot be
    /// satisfied by one change, `label:a label:b` can.
    pub fn can_be_applied(&self) -> bool {
        match self {
            FilterExpr::Qualifier(q) => q.kind().is_applicable(),
            FilterExpr::Conjunction(left, right) => {
                !self.has_duplicate_types() && left.can_be_applied() && right.can_be_applied()
            }
            FilterExpr::Disjunction(..) | FilterExpr::Negation(..) => false,
        }
    }

    fn has_duplicate_types(&self) -> bool {
        let mut seen = Vec::new();
        for kind in self.qualifier_types() {
            if matches!(kind, QualifierType::Label | QualifierType::Empty) {
                continue;
            }
            if seen.contains(&kind) {
                return true;
            }
            seen.push(kind);
        }
        false
    }
}

fn collapse(
    left: FilterExpr,
    right: FilterExpr,
    join: fn(FilterExpr, FilterExpr) -> FilterExpr,
) -> FilterExpr {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right,
        (false, true) => left,
        (false, false) => join(left, right),
    }
}

impl Default for FilterExpr {
    fn default() -> Self {
        FilterExpr::EMPTY
    }
}

impl From<Qualifier> for FilterExpr {
    fn from(q: Qualifier) -> Self {
        FilterExpr::Qualifier(q)
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpr::Qualifier(q) => write!(f, "{q}"),
            FilterExpr::Conjunction(left, right) => match right.as_ref() {
                FilterExpr::Conjunction(..) => write!(f, "{left} ({right})"),
                _ => write!(f, "{left} {right}"),
            },
            FilterExpr::Disjunction(left, right) => write!(f, "({left} OR {right})"),
            FilterExpr::Negation(inner) => match inner.as_ref() {
                FilterExpr::Conjunction(..) => write!(f, "NOT ({inner})"),
                _ => write!(f, "NOT {inner}"),
            },
        }
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
