//! Shared helpers for CLI specs

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway project directory the CLI runs in
pub struct Project {
    root: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    pub fn gantry(&self) -> GantryCmd {
        let mut cmd = Command::cargo_bin("gantry").unwrap();
        cmd.current_dir(self.root.path());
        GantryCmd { cmd }
    }
}

pub struct GantryCmd {
    cmd: Command,
}

impl GantryCmd {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> Checked {
        Checked {
            assert: self.cmd.assert().success(),
        }
    }

    pub fn fails(mut self) -> Checked {
        Checked {
            assert: self.cmd.assert().failure(),
        }
    }
}

pub struct Checked {
    assert: Assert,
}

impl Checked {
    pub fn stdout_has(self, needle: &str) -> Self {
        Checked {
            assert: self.assert.stdout(predicates::str::contains(needle)),
        }
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Checked {
            assert: self.assert.stderr(predicates::str::contains(needle)),
        }
    }

    pub fn stdout(&self) -> String {
        String::from_utf8(self.assert.get_output().stdout.clone()).unwrap()
    }
}
