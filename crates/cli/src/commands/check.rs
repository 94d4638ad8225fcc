// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hf_core::filter::is_incomplete;
use hf_core::MetaQualifierInfo;

use crate::error::{Error, Result};

use super::resolve_filter;

pub fn run(input: &str) -> Result<()> {
    let input = resolve_filter(input)?;
    run_impl(&input, &mut std::io::stdout().lock())
}

/// Prints the canonical form of `input`.
///
/// Input that stops where more was expected is reported as incomplete
/// rather than invalid.
pub(crate) fn run_impl(input: &str, out: &mut impl Write) -> Result<()> {
    let expr = match crate::time_phase!("filter::parse", { hf_core::parse(input) }) {
        Ok(expr) => expr,
        Err(e) if is_incomplete(&e, input) => return Err(Error::IncompleteFilter(e.to_string())),
        Err(e) => return Err(e.into()),
    };
    MetaQualifierInfo::from_expr(&expr)?;
    writeln!(out, "{expr}")?;
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
