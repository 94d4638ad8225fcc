// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::{Path, PathBuf};

use hf_core::Model;
use tracing::info;

use crate::config::{init_work_dir, Config};
use crate::error::Result;

pub fn run(model: String, path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    run_impl(&target_path, &model, &mut std::io::stdout().lock())
}

/// Creates the work directory, and an empty model if none exists yet.
///
/// An existing model is loaded once so a malformed file is reported now
/// rather than on first use.
pub(crate) fn run_impl(target_path: &Path, model: &str, out: &mut impl Write) -> Result<()> {
    let work_dir = init_work_dir(target_path, model)?;
    let config = Config::load(&work_dir)?;
    let model_path = config.model_path(&work_dir);
    info!(work_dir = %work_dir.display(), model = %model_path.display(), "initialized");

    writeln!(out, "Initialized hubfilter at {}", work_dir.display())?;
    if model_path.exists() {
        let existing = Model::load(&model_path)?;
        writeln!(
            out,
            "Model: {} ({} issues)",
            model_path.display(),
            existing.issues.len()
        )?;
    } else {
        if let Some(parent) = model_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Model::default().save(&model_path)?;
        writeln!(out, "Created empty model at {}", model_path.display())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
