//! Test script discovery

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::SCRIPT_EXTENSION;
use crate::TestError;

/// Test discovery engine
pub struct TestDiscovery {
    extension: String,
}

impl TestDiscovery {
    /// Create a discovery engine for `.lox` scripts
    pub fn new() -> Self {
        Self::with_extension(SCRIPT_EXTENSION)
    }

    /// Create a discovery engine for scripts with the given extension
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self { extension: extension.into() }
    }

    /// Recursively collect every script under `root`.
    ///
    /// Entries are visited in file-name order, so two runs over the same tree
    /// produce the same list. Symlinks to files count as scripts; symlinked
    /// directories are not descended into. Any traversal error is fatal.
    pub fn discover_scripts(&self, root: &Path) -> Result<Vec<PathBuf>, TestError> {
        let mut scripts = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                TestError::Discovery(format!("Failed to read {}: {}", path.display(), e))
            })?;

            if is_file(&entry) && self.is_script(entry.path()) {
                debug!("Discovered {}", entry.path().display());
                scripts.push(entry.into_path());
            }
        }

        info!("Discovered {} scripts under {}", scripts.len(), root.display());
        Ok(scripts)
    }

    fn is_script(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()).map(|ext| ext == self.extension).unwrap_or(false)
    }
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return fs::metadata(entry.path()).map(|meta| meta.is_file()).unwrap_or(false);
    }
    file_type.is_file()
}

impl Default for TestDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
