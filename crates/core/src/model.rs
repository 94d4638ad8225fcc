// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The live model: every issue plus the repository's labels, milestones and
//! collaborators.
//!
//! Filters consult the model when a qualifier needs more than the issue
//! itself, e.g. walking `parent:` ancestor chains or resolving a partial
//! milestone title during application.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::issue::{Issue, Label, Milestone, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Model {
    /// Reads a model from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let model = serde_json::from_reader(BufReader::new(file))?;
        Ok(model)
    }

    /// Writes the model to a JSON file, replacing existing content.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn issue(&self, id: u32) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    pub fn issue_mut(&mut self, id: u32) -> Result<&mut Issue> {
        self.issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(Error::IssueNotFound(id))
    }

    pub fn user(&self, login: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.login.eq_ignore_ascii_case(login))
    }

    /// True if `ancestor` appears anywhere on the issue's parent chain.
    ///
    /// Parent links that form a cycle terminate the walk instead of looping.
    pub fn has_ancestor(&self, issue: &Issue, ancestor: u32) -> bool {
        let mut seen = HashSet::new();
        let mut current = issue.parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            if !seen.insert(parent) {
                return false;
            }
            current = self.issue(parent).and_then(|p| p.parent);
        }
        false
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
