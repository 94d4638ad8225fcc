// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Four issues, two milestones, three users.
///
/// #1 open bug assigned to bob, #2 open feature, #3 merged PR under #1,
/// #4 open bug under #3.
pub const MODEL_JSON: &str = r#"{
  "issues": [
    {
      "id": 1, "title": "Crash on start", "body": "Crashes when the config file is missing",
      "author": "alice", "created_at": "2020-01-10T09:00:00Z", "updated_at": "2020-05-30T09:00:00Z",
      "labels": ["type.bug", "area-ui"], "assignee": {"login": "bob"},
      "milestone": {"number": 1, "title": "v1.0"}, "comments": 5
    },
    {
      "id": 2, "title": "Add dark mode", "author": "bob",
      "created_at": "2020-02-10T09:00:00Z", "updated_at": "2020-05-20T09:00:00Z",
      "labels": ["type.feature", "area-ui"], "milestone": {"number": 2, "title": "v1.1"},
      "comments": 1
    },
    {
      "id": 3, "title": "Fix typo in docs", "author": "carol", "state": "closed",
      "kind": "pull_request", "created_at": "2020-03-10T09:00:00Z",
      "updated_at": "2020-05-01T09:00:00Z", "labels": ["docs"],
      "assignee": {"login": "alice"}, "parent": 1
    },
    {
      "id": 4, "title": "Crash when saving", "author": "alice",
      "created_at": "2020-04-10T09:00:00Z", "updated_at": "2020-05-01T09:00:00Z",
      "labels": ["type.bug"], "parent": 3, "comments": 2
    }
  ],
  "labels": ["type.bug", "type.feature", "area-ui", "area-db", "docs"],
  "milestones": [
    {"number": 1, "title": "v1.0"},
    {"number": 2, "title": "v1.1"},
    {"number": 3, "title": "v2.0"}
  ],
  "users": [
    {"login": "alice", "name": "Alice Smith"},
    {"login": "bob"},
    {"login": "carol"}
  ]
}"#;

pub fn hf() -> Command {
    let mut cmd = cargo_bin_cmd!("hf");
    cmd.env("NO_COLOR", "1").env_remove("HF_LOG").env_remove("COLOR");
    cmd
}

/// Helper to create an initialized temp directory with an empty model.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    hf().arg("init").current_dir(temp.path()).assert().success();
    temp
}

/// Helper to create an initialized temp directory holding [`MODEL_JSON`].
pub fn init_with_model() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("model.json"), MODEL_JSON).unwrap();
    hf().arg("init").current_dir(temp.path()).assert().success();
    temp
}

/// Run `hf` in `temp` and return stdout, asserting success.
pub fn run_ok(temp: &TempDir, args: &[&str]) -> String {
    let output = hf().args(args).current_dir(temp.path()).output().unwrap();
    assert!(
        output.status.success(),
        "hf {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Issue ids printed by `hf list -o id`.
pub fn list_ids(temp: &TempDir, filter: &[&str]) -> Vec<u32> {
    let mut args = vec!["list", "-o", "id"];
    args.extend_from_slice(filter);
    run_ok(temp, &args)
        .lines()
        .map(|l| l.parse().unwrap())
        .collect()
}

/// The saved model as JSON.
pub fn model_json(temp: &TempDir) -> serde_json::Value {
    let raw = std::fs::read_to_string(temp.path().join("model.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// The JSON object of one issue in the saved model.
pub fn issue_json(temp: &TempDir, id: u64) -> serde_json::Value {
    model_json(temp)["issues"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == id)
        .cloned()
        .unwrap()
}
