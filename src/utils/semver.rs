use crate::types::error::{BumpError, Result};

/// Increments the patch component of an `x.y.z` version.
///
/// Anything that does not split into exactly three dot-separated parts is
/// returned unchanged. Only the patch component is parsed.
pub fn increment_patch(current: &str) -> Result<String> {
    let mut parts: Vec<String> = current.split('.').map(str::to_string).collect();
    if parts.len() != 3 {
        return Ok(current.to_string());
    }

    let patch = parts[2]
        .parse::<u64>()
        .map_err(|e| BumpError::InvalidVersion {
            version: current.to_string(),
            reason: format!("patch component \"{}\": {}", parts[2], e),
        })?;
    let next = patch
        .checked_add(1)
        .ok_or_else(|| BumpError::InvalidVersion {
            version: current.to_string(),
            reason: "patch component overflows".to_string(),
        })?;
    parts[2] = next.to_string();

    Ok(parts.join("."))
}

/// Drops one leading `v` from a user-supplied version.
pub fn strip_v_prefix(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}
