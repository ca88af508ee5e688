/// Metadata document holding `version` and `downloadUrl`.
pub const METADATA_FILE: &str = "codemeta.json";

/// Source file carrying the backtick-quoted `Version` literal.
pub const SOURCE_FILE: &str = "datatools.go";
