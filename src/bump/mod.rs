pub mod metadata;
pub mod plan;
pub mod source;
