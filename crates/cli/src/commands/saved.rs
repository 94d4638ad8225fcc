// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tracing::info;

use crate::cli::SavedCommand;
use crate::colors;
use crate::config::Config;
use crate::error::Result;

use super::{expand_saved, Project};

pub fn run(cmd: SavedCommand) -> Result<()> {
    let mut project = Project::open()?;
    let mut out = std::io::stdout().lock();
    match cmd {
        SavedCommand::Add {
            name,
            filter,
            force,
        } => {
            let canonical = add(&mut project.config, &name, &filter.joined(), force)?;
            project.save_config()?;
            info!(name = %name, filter = %canonical, "saved filter");
            writeln!(out, "Saved @{}: {}", name, canonical)?;
        }
        SavedCommand::Remove { name } => {
            project.config.remove_filter(&name)?;
            project.save_config()?;
            writeln!(out, "Removed @{}", name)?;
        }
        SavedCommand::List => list(&project.config, &mut out, colors::should_colorize())?,
    }
    Ok(())
}

/// Validates `input` and stores its canonical form under `name`.
///
/// References to other saved filters are expanded first, so a saved
/// filter never depends on another.
pub(crate) fn add(config: &mut Config, name: &str, input: &str, force: bool) -> Result<String> {
    let expanded = expand_saved(input, config)?;
    let expr = hf_core::parse(&expanded)?;
    hf_core::MetaQualifierInfo::from_expr(&expr)?;
    let canonical = expr.to_string();
    config.add_filter(name, canonical.clone(), force)?;
    Ok(canonical)
}

pub(crate) fn list(config: &Config, out: &mut impl Write, colorize: bool) -> Result<()> {
    if config.filters.is_empty() {
        writeln!(out, "No saved filters")?;
        return Ok(());
    }
    let width = config.filters.keys().map(|k| k.len()).max().unwrap_or(0);
    for (name, filter) in &config.filters {
        let label = format!("@{name:<width$}");
        let label = if colorize {
            colors::literal(&label)
        } else {
            label
        };
        writeln!(out, "{label}  {filter}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "saved_tests.rs"]
mod tests;
