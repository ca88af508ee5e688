use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize metadata for {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no string field \"{field}\"", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("invalid version \"{version}\": {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("expected version literal {pattern} not found in {}", path.display())]
    PatternNotFound { path: PathBuf, pattern: String },
}

impl BumpError {
    /// Maps an I/O failure on `path`, keeping "not found" as its own kind.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            BumpError::NotFound { path }
        } else {
            BumpError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, BumpError>;
