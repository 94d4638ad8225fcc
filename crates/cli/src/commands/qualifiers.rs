// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hf_core::QualifierType;

use crate::colors;
use crate::error::Result;

pub fn run() -> Result<()> {
    run_impl(&mut std::io::stdout().lock(), colors::should_colorize())
}

pub(crate) fn run_impl(out: &mut impl Write, colorize: bool) -> Result<()> {
    for kind in QualifierType::named() {
        let name = format!("{}:", kind.as_str());
        let name = if colorize {
            // Pad before coloring so escapes don't skew the column.
            colors::literal(&format!("{name:<12}"))
        } else {
            format!("{name:<12}")
        };
        writeln!(out, "{name}{}", kind.valid_inputs())?;

        let aliases = kind.aliases();
        if !aliases.is_empty() {
            let aliases = format!("also: {}", aliases.join(", "));
            let aliases = if colorize {
                colors::context(&aliases)
            } else {
                aliases
            };
            writeln!(out, "{:12}{aliases}", "")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "qualifiers_tests.rs"]
mod tests;
