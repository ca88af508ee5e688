use crate::types::error::{BumpError, Result};
use crate::utils::fs::{read_text, write_text};
use crate::utils::logger::{LogLevel, Logger};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::path::Path;

const VERSION_FIELD: &str = "version";
const DOWNLOAD_URL_FIELD: &str = "downloadUrl";

/// Reads the `version` field of the metadata document.
pub fn read_current_version(path: &Path) -> Result<String> {
    let meta = parse_document(path, &read_text(path)?)?;
    string_field(path, &meta, VERSION_FIELD).map(str::to_string)
}

/// Sets `version` to `next` and swaps `current` for `next` inside `downloadUrl`,
/// then rewrites the document with 4-space indentation.
///
/// ### Parameters
/// - `path`: The metadata document (e.g. `codemeta.json`).
/// - `current`: The version currently recorded.
/// - `next`: The version to write.
///
pub fn update_metadata(path: &Path, current: &str, next: &str) -> Result<()> {
    let content = read_text(path)?;
    let updated = rewrite_metadata(path, &content, current, next)?;
    write_text(path, &updated)?;

    Logger::new().log_message(
        LogLevel::Success,
        &format!(
            "updated {} version from {} to {}",
            path.display(),
            current,
            next
        ),
    );
    Ok(())
}

fn rewrite_metadata(path: &Path, content: &str, current: &str, next: &str) -> Result<String> {
    let mut meta = parse_document(path, content)?;

    // Validate before touching anything so a bad document is never half-edited.
    let download_url = string_field(path, &meta, DOWNLOAD_URL_FIELD)?.replace(current, next);

    if let Some(obj) = meta.as_object_mut() {
        obj.insert(VERSION_FIELD.to_string(), Value::String(next.to_string()));
        obj.insert(DOWNLOAD_URL_FIELD.to_string(), Value::String(download_url));
    }

    to_pretty_json(path, &meta)
}

fn parse_document(path: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| BumpError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// A top-level string field; absent, non-string and non-object documents all
/// count as missing.
fn string_field<'a>(path: &Path, meta: &'a Value, field: &'static str) -> Result<&'a str> {
    meta.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| BumpError::MissingField {
            path: path.to_path_buf(),
            field,
        })
}

fn to_pretty_json(path: &Path, value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser).map_err(|e| BumpError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
