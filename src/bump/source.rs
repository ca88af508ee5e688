use crate::types::error::{BumpError, Result};
use crate::utils::fs::{read_text, write_text};
use crate::utils::logger::{LogLevel, Logger};
use std::path::Path;

/// The literal assignment matched in the source file, e.g. ``Version = `v1.2.3` ``.
pub fn version_literal(version: &str) -> String {
    format!("Version = `v{}`", version)
}

/// Replaces every ``Version = `v{current}` `` literal with the `next` one and
/// overwrites the file.
///
/// A file without the literal is rewritten unchanged, unless `strict` is set,
/// in which case nothing is written and `PatternNotFound` is returned.
///
/// ### Parameters
/// - `path`: The source file holding the version constant.
/// - `current`: The version currently recorded.
/// - `next`: The version to write.
/// - `strict`: Whether a missing literal is an error.
///
pub fn update_source(path: &Path, current: &str, next: &str, strict: bool) -> Result<()> {
    let content = read_text(path)?;
    let pattern = version_literal(current);

    if strict && !content.contains(&pattern) {
        return Err(BumpError::PatternNotFound {
            path: path.to_path_buf(),
            pattern,
        });
    }

    let updated = content.replace(&pattern, &version_literal(next));
    write_text(path, &updated)?;

    Logger::new().log_message(
        LogLevel::Success,
        &format!(
            "updated {} Version from v{} to v{}",
            path.display(),
            current,
            next
        ),
    );
    Ok(())
}
