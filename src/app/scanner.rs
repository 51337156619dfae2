use crate::app::models::Entry;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

pub struct Scanner {
    show_all: bool,
}

impl Scanner {
    pub fn new(show_all: bool) -> Self {
        Self { show_all }
    }

    /// Lists the immediate children of `dir`, dropping hidden names and, unless
    /// every entry is wanted, anything that is not a directory. Entries come back
    /// in byte-wise name order.
    pub fn list(&self, dir: &Path, parent_depth: usize) -> Result<Vec<Entry>> {
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .hidden(true)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = result.with_context(|| format!("Failed to list {:?}", dir))?;
            if entry.depth() == 0 {
                continue;
            }

            let path = entry.into_path();
            // Follows symlinks, so a link to a directory is rendered as one.
            let metadata =
                fs::metadata(&path).with_context(|| format!("Failed to stat {:?}", path))?;
            let is_dir = metadata.is_dir();
            if !is_dir && !self.show_all {
                continue;
            }

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            entries.push(Entry {
                path,
                name,
                is_dir,
                parent_depth,
            });
        }

        Ok(entries)
    }
}
