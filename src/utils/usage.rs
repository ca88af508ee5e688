pub fn get_signature(version: &str) -> String {
    format!("Verbump v{} (release version helper)", version)
}

/// Synopsis appended after clap's option list.
pub fn get_synopsis(app_name: &str, metadata_file: &str, source_file: &str) -> String {
    format!(
        r#"SYNOPSIS

{app} shows or sets the proposed new value for a version number.
By default it proposes an increment in the patch number of a semver
string read from {meta}. If the -y, --yes option is included it
commits the change to {meta} and {src}.

EXAMPLES

    {app}                  show current and proposed version
    {app} --set v2.0.0     propose 2.0.0 instead of a patch bump
    {app} -y               write the patch bump to both files
"#,
        app = app_name,
        meta = metadata_file,
        src = source_file,
    )
}
