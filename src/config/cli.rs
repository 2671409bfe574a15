use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Filesystem-backed storage for roster files.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let contents = fs::read_to_string(path)?;
        Ok(contents)
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, contents)?;

        // Canonicalize after the write so relative paths resolve.
        let full_path = fs::canonicalize(path)?;
        Ok(full_path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
