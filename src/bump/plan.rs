use crate::bump::metadata::{read_current_version, update_metadata};
use crate::bump::source::update_source;
use crate::types::config::BumpConfig;
use crate::types::error::Result;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::semver::{increment_patch, strip_v_prefix};

/// Current and proposed version for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpPlan {
    pub current: String,
    pub next: String,
}

impl BumpPlan {
    /// Reads the current version from the metadata document and picks the next
    /// one: `set` (minus a leading `v`) when given, a patch bump otherwise.
    pub fn resolve(config: &BumpConfig, set: Option<&str>) -> Result<Self> {
        let current = read_current_version(&config.metadata_path)?;
        let next = match set {
            Some(value) => strip_v_prefix(value).to_string(),
            None => increment_patch(&current)?,
        };
        Ok(BumpPlan { current, next })
    }

    /// Rewrites the metadata document, then the source file.
    ///
    /// Stops at the first failure; an already rewritten metadata document is
    /// not restored.
    pub fn apply(&self, config: &BumpConfig) -> Result<()> {
        update_metadata(&config.metadata_path, &self.current, &self.next)?;
        update_source(&config.source_path, &self.current, &self.next, config.strict)?;
        Ok(())
    }

    pub fn report(&self) {
        let logger = Logger::new();
        logger.log_message(LogLevel::Info, &format!("current version: {}", self.current));
        logger.log_message(LogLevel::Info, &format!("proposed version: {}", self.next));
    }
}
