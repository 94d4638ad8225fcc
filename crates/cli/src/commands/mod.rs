// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod apply;
pub mod check;
pub mod init;
pub mod list;
pub mod qualifiers;
pub mod saved;
#[cfg(test)]
pub(crate) mod testing;
pub mod tokens;

use std::path::PathBuf;

use hf_core::Model;
use tracing::debug;

use crate::config::{find_work_dir, Config};
use crate::error::{Error, Result};

/// An initialized project: its `.hubfilter` directory and configuration.
pub struct Project {
    pub work_dir: PathBuf,
    pub config: Config,
}

impl Project {
    /// Open the project containing the current directory.
    pub fn open() -> Result<Self> {
        let work_dir = find_work_dir()?;
        let config = Config::load(&work_dir)?;
        Ok(Project { work_dir, config })
    }

    pub fn model_path(&self) -> PathBuf {
        self.config.model_path(&self.work_dir)
    }

    pub fn load_model(&self) -> Result<Model> {
        let path = self.model_path();
        if !path.exists() {
            return Err(Error::ModelNotFound(path.display().to_string()));
        }
        let model = crate::time_phase!("model::load", { Model::load(&path)? });
        debug!(path = %path.display(), issues = model.issues.len(), "loaded model");
        Ok(model)
    }

    pub fn save_model(&self, model: &Model) -> Result<()> {
        let path = self.model_path();
        crate::time_phase!("model::save", { model.save(&path)? });
        debug!(path = %path.display(), "saved model");
        Ok(())
    }

    pub fn save_config(&self) -> Result<()> {
        self.config.save(&self.work_dir)
    }
}

/// Expand `@name` references to saved filters.
///
/// Only opens the project when the input contains `@`, so commands that
/// need no model work outside a project.
pub fn resolve_filter(input: &str) -> Result<String> {
    if !input.contains('@') {
        return Ok(input.to_string());
    }
    let project = Project::open()?;
    expand_saved(input, &project.config)
}

/// Replace each `@name` with the saved filter in parentheses.
///
/// A bare `@` is left in place for the parser to reject.
pub fn expand_saved(input: &str, config: &Config) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('@') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..len];
        if name.is_empty() {
            out.push('@');
        } else {
            let saved = config.saved_filter(name)?;
            if !saved.is_empty() {
                out.push('(');
                out.push_str(saved);
                out.push(')');
            }
            debug!(name, saved, "expanded saved filter");
        }
        rest = &after[len..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
