use crate::types::error::{BumpError, Result};
use std::fs;
use std::path::Path;

/// Reads the whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| BumpError::io(path, e))
}

/// Overwrites the file with `contents` in a single write.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| BumpError::io(path, e))
}
