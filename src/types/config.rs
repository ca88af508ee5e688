use crate::utils::path::{METADATA_FILE, SOURCE_FILE};
use std::path::{Path, PathBuf};

/// Locations of the two files a bump rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpConfig {
    pub metadata_path: PathBuf,
    pub source_path: PathBuf,
    /// Fail when the source file has no version literal to replace.
    pub strict: bool,
}

impl BumpConfig {
    /// The two fixed file names resolved against `root`.
    pub fn in_dir(root: &Path) -> Self {
        BumpConfig {
            metadata_path: root.join(METADATA_FILE),
            source_path: root.join(SOURCE_FILE),
            strict: false,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
