#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MATH_SOURCE: &str = "def add(a, b): return a + b";
pub const MATH_TEST: &str = "def test_add(): assert add(1,2)==3";

/// A throwaway project directory; files are created relative to its root.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        self.write_bytes(relative, content.as_bytes())
    }

    pub fn write_bytes(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// `src/math_utils.py` with its test in `src/tests/`.
    pub fn math_utils() -> Self {
        let project = Self::new();
        project.write("src/math_utils.py", MATH_SOURCE);
        project.write("src/tests/test_math_utils.py", MATH_TEST);
        project
    }
}
