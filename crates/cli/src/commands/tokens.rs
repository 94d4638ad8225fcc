// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hf_core::filter::lex;

use crate::error::Result;

use super::resolve_filter;

pub fn run(input: &str) -> Result<()> {
    let input = resolve_filter(input)?;
    run_impl(&input, &mut std::io::stdout().lock())
}

/// One line per token: byte offset, then the token.
pub(crate) fn run_impl(input: &str, out: &mut impl Write) -> Result<()> {
    for token in lex(input)? {
        writeln!(out, "{:>4}  {}", token.offset, token)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
