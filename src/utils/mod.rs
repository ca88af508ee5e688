pub mod fs;
pub mod logger;
pub mod path;
pub mod semver;
pub mod usage;
