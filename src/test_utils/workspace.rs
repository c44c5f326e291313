//! A temporary directory holding the files of one test run.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory for data, content, template and output files.
///
/// Removed when dropped.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp directory")?;
        Ok(Self {
            temp_dir,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the workspace; the file need not exist.
    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write `contents` to `name`, creating parent directories, and return
    /// its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.file(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.file(name);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }
}
