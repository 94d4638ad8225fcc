// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.hubfilter/config.toml` and includes:
//! - `model`: Path to the model JSON (relative to the project root or absolute)
//! - `[filters]`: Named saved filters, kept in canonical form

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".hubfilter";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_MODEL_FILE: &str = "model.json";

/// Project configuration stored in `.hubfilter/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the model file.
    #[serde(default = "default_model")]
    pub model: String,
    /// Saved filters by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, String>,
}

fn default_model() -> String {
    DEFAULT_MODEL_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: default_model(),
            filters: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn new(model: impl Into<String>) -> Self {
        Config {
            model: model.into(),
            filters: BTreeMap::new(),
        }
    }

    /// Load configuration from the work directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save configuration to the work directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Resolves the model path against the project root (the parent of the
    /// work directory).
    pub fn model_path(&self, work_dir: &Path) -> PathBuf {
        let model = Path::new(&self.model);
        if model.is_absolute() {
            return model.to_path_buf();
        }
        work_dir.parent().unwrap_or(work_dir).join(model)
    }

    pub fn saved_filter(&self, name: &str) -> Result<&str> {
        self.filters
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::SavedFilterNotFound(name.to_string()))
    }

    /// Stores a filter under `name`. Existing entries are only replaced when
    /// `force` is set.
    pub fn add_filter(&mut self, name: &str, filter: String, force: bool) -> Result<()> {
        if !validate_filter_name(name) {
            return Err(Error::InvalidFilterName(name.to_string()));
        }
        if !force && self.filters.contains_key(name) {
            return Err(Error::SavedFilterExists(name.to_string()));
        }
        self.filters.insert(name.to_string(), filter);
        Ok(())
    }

    pub fn remove_filter(&mut self, name: &str) -> Result<String> {
        self.filters
            .remove(name)
            .ok_or_else(|| Error::SavedFilterNotFound(name.to_string()))
    }
}

/// Filter names are non-empty and made of ASCII letters, digits, `-` and `_`.
pub fn validate_filter_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Find the `.hubfilter` directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Create `.hubfilter/` under `path` with a fresh config.
///
/// An existing but empty `.hubfilter/` directory is reused.
pub fn init_work_dir(path: &Path, model: &str) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);
    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }
    fs::create_dir_all(&work_dir)?;
    Config::new(model).save(&work_dir)?;
    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
