// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed intervals used as qualifier content.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// An interval with optional bounds on either side.
///
/// A missing bound is unbounded (`*` in filter syntax). When `strict` is set
/// both present bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    start: Option<T>,
    end: Option<T>,
    strict: bool,
}

pub type NumberRange = Range<i64>;
pub type DateRange = Range<NaiveDate>;

impl<T: Copy + Ord> Range<T> {
    /// Builds a range. At least one bound must be present.
    pub fn new(start: Option<T>, end: Option<T>, strict: bool) -> Result<Self> {
        if start.is_none() && end.is_none() {
            return Err(Error::Semantic(
                "a range needs at least one bound".to_string(),
            ));
        }
        Ok(Range { start, end, strict })
    }

    /// Inclusive range `start .. end`.
    pub fn between(start: T, end: T) -> Self {
        Range {
            start: Some(start),
            end: Some(end),
            strict: false,
        }
    }

    /// `>=start` (or `>start` when strict).
    pub fn above(start: T, strict: bool) -> Self {
        Range {
            start: Some(start),
            end: None,
            strict,
        }
    }

    /// `<=end` (or `<end` when strict).
    pub fn below(end: T, strict: bool) -> Self {
        Range {
            start: None,
            end: Some(end),
            strict,
        }
    }

    pub fn start(&self) -> Option<T> {
        self.start
    }

    pub fn end(&self) -> Option<T> {
        self.end
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// True if `value` lies within the range.
    pub fn encloses(&self, value: T) -> bool {
        let above = match self.start {
            None => true,
            Some(start) if self.strict => value > start,
            Some(start) => value >= start,
        };
        let below = match self.end {
            None => true,
            Some(end) if self.strict => value < end,
            Some(end) => value <= end,
        };
        above && below
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lower, upper) = if self.strict { (">", "<") } else { (">=", "<=") };
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => write!(f, "{start} .. {end}"),
            (Some(start), None) => write!(f, "{lower}{start}"),
            (None, Some(end)) => write!(f, "{upper}{end}"),
            (None, None) => write!(f, "*"),
        }
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
