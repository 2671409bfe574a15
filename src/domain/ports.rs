use std::path::{Path, PathBuf};

use crate::utils::error::Result;

/// Persistence backend for roster files.
pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes `contents` to `path`, creating missing parent directories and
    /// overwriting an existing file. Returns the resolved absolute path.
    fn write_string(&self, path: &Path, contents: &str) -> Result<PathBuf>;

    fn exists(&self, path: &Path) -> bool;
}

/// Interactive surface the menu session talks to. The core never depends
/// on this; only the presentation layer does.
pub trait Console {
    /// Shows `message` and reads one line of input, without the trailing newline.
    fn prompt(&mut self, message: &str) -> Result<String>;

    fn show(&mut self, message: &str);

    fn show_error(&mut self, message: &str);
}

pub trait ConfigProvider {
    fn conference_name(&self) -> &str;

    /// Roster file loaded at startup, if any.
    fn default_roster_path(&self) -> Option<&str>;

    /// On-disk format name ("legacy" or "csv").
    fn roster_format(&self) -> &str;
}
