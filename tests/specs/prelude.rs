// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs
//!
//! `bg()` builds a command for the binary; `.passes()` / `.fails()` run it
//! and return an [`Output`] with chainable assertions.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Flags that keep boarding fast enough for specs
pub const FAST: &[&str] = &["--min-delay", "0ms", "--max-delay", "3ms", "--poll-interval", "5ms"];

pub struct Cli {
    cmd: Command,
}

/// Start a `bg` invocation
pub fn bg() -> Cli {
    let mut cmd = Command::cargo_bin("bg").unwrap();
    cmd.env("RUST_LOG", "warn");
    Cli { cmd }
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn fast(self) -> Self {
        self.args(FAST)
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Run and require exit code 0
    pub fn passes(mut self) -> Output {
        let output = self.cmd.output().unwrap();
        let out = Output::from(output);
        assert!(out.success, "expected success\nstdout:\n{}\nstderr:\n{}", out.stdout, out.stderr);
        out
    }

    /// Run and require a non-zero exit code
    pub fn fails(mut self) -> Output {
        let output = self.cmd.output().unwrap();
        let out = Output::from(output);
        assert!(!out.success, "expected failure\nstdout:\n{}\nstderr:\n{}", out.stdout, out.stderr);
        out
    }
}

pub struct Output {
    success: bool,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Output {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout lacks {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr lacks {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }
}

/// A scratch directory for config files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// `bg` running inside this directory
    pub fn bg(&self) -> Cli {
        bg().current_dir(self.path())
    }
}
