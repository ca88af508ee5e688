use crate::{
    bump::plan::BumpPlan,
    types::config::BumpConfig,
    utils::{
        logger::{LogLevel, Logger},
        path::{METADATA_FILE, SOURCE_FILE},
        usage::{get_signature, get_synopsis},
    },
};
use anyhow::Context;
use clap::error::ErrorKind;
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::Parser;
use std::env;
use std::process::ExitCode;

mod bump;
mod types;
mod utils;

#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(about = "Shows or applies the next version of a project's codemeta.json and datatools.go")]
#[command(version)]
struct Cli {
    /// Explicitly set the value of the new version string (a leading "v" is dropped)
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    set: Option<String>,

    /// Commit the proposed change to the metadata document and source file
    #[arg(short = 'y', long, default_value_t = false)]
    yes: bool,

    /// Fail when the source file has no version literal to replace
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> ExitCode {
    let args = normalize_args(std::env::args());

    let cmd = Cli::command()
        .before_help(get_signature(env!("CARGO_PKG_VERSION")))
        .after_help(get_synopsis("verbump", METADATA_FILE, SOURCE_FILE));

    let cli = match cmd
        .try_get_matches_from(args)
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(e) => return exit_for_clap_error(e),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let causes: Vec<String> = e.chain().skip(1).map(|c| c.to_string()).collect();
            Logger::new().log_message_with_trace(
                LogLevel::Error,
                &e.to_string(),
                causes.iter().map(String::as_str).collect(),
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cwd = env::current_dir().context("failed to get current directory")?;
    let config = &BumpConfig::in_dir(&cwd).with_strict(cli.strict);

    let plan = BumpPlan::resolve(config, cli.set.as_deref()).with_context(|| {
        format!(
            "cannot determine the next version from {}",
            config.metadata_path.display()
        )
    })?;

    if cli.yes {
        plan.apply(config)
            .with_context(|| format!("failed to apply version {}", plan.next))?;
    } else {
        plan.report();
    }

    Ok(())
}

/// Reduces the raw arguments to the flags the tool understands.
///
/// Single-dash long spellings (`-help`, `-yes`) become their double-dash
/// forms, each flag is kept once, only the first `--set` and the argument
/// after it survive, and anything else is dropped.
fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut out: Vec<String> = args.next().into_iter().collect();
    let mut seen: Vec<&'static str> = Vec::new();

    while let Some(arg) = args.next() {
        let flag = match arg.as_str() {
            "-h" | "-help" | "--help" => "--help",
            "-y" | "-yes" | "--yes" => "--yes",
            "-V" | "--version" => "--version",
            "--strict" => "--strict",
            "--set" => "--set",
            _ => continue,
        };
        // `--set` always swallows its value, even when repeated.
        let value = if flag == "--set" { args.next() } else { None };
        if seen.contains(&flag) {
            continue;
        }
        seen.push(flag);
        out.push(flag.to_string());
        out.extend(value);
    }
    out
}

/// Help and version output exit 0; a `--set` without its value exits 1.
fn exit_for_clap_error(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
