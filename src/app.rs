// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod resolver;
pub mod scanner;

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};

use self::cli::parse_args;
use self::config::resolve_config;
use self::formatter::{root_line, TreeRenderer};
use self::models::OUTPUT_FILE;
use self::resolver::DescriptionResolver;

/// Initializes components and orchestrates data flow.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    // 1. Parse Args
    let cli = parse_args(args)?;

    // 2. Resolve Configuration (validates the root)
    let config = resolve_config(&cli)?;
    log::debug!("Resolved configuration: {:?}", config);

    // 3. Truncate the output before anything is written to it
    let file = File::create(OUTPUT_FILE)
        .with_context(|| format!("Failed to create {}", OUTPUT_FILE))?;
    let mut out = BufWriter::new(file);

    // 4. Root line
    let description = DescriptionResolver::new()?.resolve(&config.root_path);
    writeln!(
        out,
        "{}",
        root_line(&config.root_path, description.as_deref())
    )
    .with_context(|| format!("Failed to write {}", OUTPUT_FILE))?;

    // 5. Everything below the root
    let stats = TreeRenderer::new(&config).render(&mut out)?;
    out.flush()
        .with_context(|| format!("Failed to write {}", OUTPUT_FILE))?;
    log::debug!(
        "Rendered {} directories and {} files",
        stats.directories,
        stats.files
    );

    println!("Directory structure has been saved to {}", OUTPUT_FILE);

    Ok(())
}
