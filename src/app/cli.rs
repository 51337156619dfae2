use crate::app::error::CliError;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "generate-tree",
    about = "Save a directory tree, with a one-line project description, to directory_structure.txt",
    override_usage = "generate-tree [--A | --F] [--<number>] /path/to/directory",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Show all files and folders
    #[arg(long = "A", overrides_with = "folders_only")]
    pub all: bool,

    /// Show only folders (default)
    #[arg(long = "F", overrides_with = "all")]
    pub folders_only: bool,

    /// Maximum depth level, also written as --<number> (e.g., --3 for 3 levels)
    #[arg(long, value_name = "number", value_parser = clap::value_parser!(u64).range(1..))]
    pub depth: Option<u64>,

    /// Print this help
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Directory to render
    #[arg(value_name = "DIRECTORY")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// `Some(true)` for `--A`, `Some(false)` for `--F`, `None` when neither was given.
    pub fn show_all(&self) -> Option<bool> {
        match (self.all, self.folders_only) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// The single positional directory.
    pub fn directory(&self) -> Result<&PathBuf, CliError> {
        match self.paths.as_slice() {
            [] => Err(CliError::Usage("No directory path provided".into())),
            [path] => Ok(path),
            _ => Err(CliError::Usage("Multiple directory paths provided".into())),
        }
    }
}

/// Parses process arguments (including the program name).
pub fn parse_args<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = args.into_iter().map(Into::into).map(expand_depth_shorthand);
    let cli = Cli::try_parse_from(args).map_err(|err| CliError::Usage(summarize(&err)))?;

    if cli.help {
        return Err(CliError::HelpRequested);
    }
    cli.directory()?;

    Ok(cli)
}

pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Rewrites `--<digits>` into `--depth=<digits>` so clap can validate it.
fn expand_depth_shorthand(arg: OsString) -> OsString {
    let digits = arg
        .to_str()
        .and_then(|s| s.strip_prefix("--"))
        .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()));

    match digits {
        Some(digits) => OsString::from(format!("--depth={}", digits)),
        None => arg,
    }
}

/// First line of a clap error without its `error: ` tag.
fn summarize(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").trim().to_string()
}
