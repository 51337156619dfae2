use std::fmt;
use std::path::PathBuf;

/// Name of the file the tree is written to, relative to the working directory.
pub const OUTPUT_FILE: &str = "directory_structure.txt";

/// Represents the final configuration after merging defaults and CLI args.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Include non-directory entries.
    pub show_all: bool,
    /// Deepest level shown below the root. `None` means unlimited; never zero.
    pub max_depth: Option<usize>,
    /// Canonicalized, known to be a directory.
    pub root_path: PathBuf,
}

impl TreeConfig {
    /// True when children at `depth` must not be listed at all.
    pub fn prunes(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

/// A single child discovered while listing a directory.
#[derive(Debug)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub parent_depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Branch,
    Last,
}

impl Connector {
    pub fn for_position(is_last: bool) -> Self {
        if is_last {
            Connector::Last
        } else {
            Connector::Branch
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Branch => "├──",
            Connector::Last => "└──",
        }
    }

    /// Indentation handed down to the children of an entry with this connector.
    pub fn child_indent(self) -> &'static str {
        match self {
            Connector::Branch => "│   ",
            Connector::Last => "    ",
        }
    }
}

/// One line of the rendered tree, below the root.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderLine<'a> {
    pub prefix: &'a str,
    pub connector: Connector,
    pub name: &'a str,
    pub trailing_slash: bool,
}

impl fmt::Display for RenderLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.trailing_slash { "/" } else { "" };
        write!(
            f,
            "{}{} {}{}",
            self.prefix,
            self.connector.glyph(),
            self.name,
            marker
        )
    }
}

/// Counts gathered during a rendering pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub directories: usize,
    pub files: usize,
}
