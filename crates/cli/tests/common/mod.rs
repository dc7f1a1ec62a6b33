// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for goldcheck binary tests.

#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A test tree with `work/` (where commands run) and `fixtures/` beside it,
/// matching the default `../fixtures` lookup.
pub struct Tree {
    _tmp: TempDir,
    pub work: PathBuf,
    pub fixtures: PathBuf,
}

impl Tree {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let work = tmp.path().join("work");
        let fixtures = tmp.path().join("fixtures");
        std::fs::create_dir_all(&work).unwrap();
        std::fs::create_dir_all(&fixtures).unwrap();
        Self {
            _tmp: tmp,
            work,
            fixtures,
        }
    }

    pub fn fixture(&self, name: &str, content: &str) -> &Self {
        std::fs::write(self.fixtures.join(name), content).unwrap();
        self
    }

    pub fn generated(&self, name: &str, content: &str) -> &Self {
        std::fs::write(self.work.join(name), content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        &self.work
    }

    /// goldcheck running inside `work/` with no environment overrides.
    pub fn goldcheck(&self) -> Command {
        let mut cmd = Command::cargo_bin("goldcheck").unwrap();
        cmd.current_dir(&self.work)
            .env_remove("GOLDCHECK_FIXTURES_DIR")
            .env_remove("GOLDCHECK_LOG");
        cmd
    }
}
