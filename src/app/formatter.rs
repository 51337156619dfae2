use crate::app::models::{Connector, RenderLine, RenderStats, TreeConfig};
use crate::app::scanner::Scanner;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Gap between the root name and its description.
const DESCRIPTION_GAP: &str = "         ";

/// The first line of the output: the root name, optionally followed by its description.
pub fn root_line(root: &Path, description: Option<&str>) -> String {
    let name = match root.file_name() {
        Some(name) => format!("{}/", name.to_string_lossy()),
        None => root.to_string_lossy().into_owned(),
    };

    match description {
        Some(description) => format!("{}{}{}", name, DESCRIPTION_GAP, description),
        None => name,
    }
}

pub struct TreeRenderer<'a> {
    config: &'a TreeConfig,
    scanner: Scanner,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(config: &'a TreeConfig) -> Self {
        Self {
            config,
            scanner: Scanner::new(config.show_all),
        }
    }

    /// Writes every line below the root, depth first, in sorted order.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<RenderStats> {
        let mut stats = RenderStats::default();
        self.render_dir(out, &self.config.root_path, "", 1, &mut stats)?;
        Ok(stats)
    }

    fn render_dir<W: Write>(
        &self,
        out: &mut W,
        dir: &Path,
        prefix: &str,
        depth: usize,
        stats: &mut RenderStats,
    ) -> Result<()> {
        if self.config.prunes(depth) {
            log::debug!("Depth limit reached at {:?}", dir);
            return Ok(());
        }

        log::trace!("Listing {:?} at depth {}", dir, depth);
        let entries = self.scanner.list(dir, depth - 1)?;
        let count = entries.len();

        for (index, entry) in entries.iter().enumerate() {
            let connector = Connector::for_position(index + 1 == count);

            // The scanner has already dropped files unless show_all is set.
            if !(entry.is_dir || self.config.show_all) {
                continue;
            }

            let line = RenderLine {
                prefix,
                connector,
                name: &entry.name,
                trailing_slash: entry.is_dir,
            };
            writeln!(out, "{}", line).context("Failed to write tree line")?;
            log::trace!("Emitted {:?} below depth {}", entry.path, entry.parent_depth);

            if entry.is_dir {
                stats.directories += 1;
                let child_prefix = format!("{}{}", prefix, connector.child_indent());
                self.render_dir(out, &entry.path, &child_prefix, depth + 1, stats)?;
            } else {
                stats.files += 1;
            }
        }

        Ok(())
    }
}
