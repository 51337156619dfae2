use crate::app::cli::Cli;
use crate::app::error::CliError;
use crate::app::models::TreeConfig;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults read from `<config_dir>/generate-tree/config.toml`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub all: Option<bool>,
    pub depth: Option<usize>,
}

fn defaults_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("generate-tree").join("config.toml"))
}

fn load_defaults() -> Result<Defaults> {
    match defaults_path() {
        Some(path) if path.exists() => load_defaults_from(&path),
        _ => Ok(Defaults::default()),
    }
}

pub fn load_defaults_from(path: &Path) -> Result<Defaults> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {:?}", path))?;
    let defaults: Defaults = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config at {:?}", path))?;

    if defaults.depth == Some(0) {
        bail!("Invalid depth 0 in {:?}: depth must be at least 1", path);
    }
    Ok(defaults)
}

pub fn resolve_config(cli: &Cli) -> Result<TreeConfig> {
    let defaults = load_defaults()?;
    merge(cli, defaults)
}

/// CLI flag > defaults file > built-in default.
fn merge(cli: &Cli, defaults: Defaults) -> Result<TreeConfig> {
    let directory = cli.directory()?;

    let config = TreeConfig {
        show_all: cli.show_all().or(defaults.all).unwrap_or(false),
        max_depth: cli
            .depth
            .map(|d| usize::try_from(d).unwrap_or(usize::MAX))
            .or(defaults.depth),
        root_path: validate_root(directory)?,
    };

    Ok(config)
}

/// Canonicalizes the target and checks that it is a directory.
pub fn validate_root(path: &Path) -> Result<PathBuf, CliError> {
    match fs::canonicalize(path) {
        Ok(canonical) if canonical.is_dir() => Ok(canonical),
        _ => Err(CliError::Path(path.to_path_buf())),
    }
}
