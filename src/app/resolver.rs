//! Finds a one-line description for the root directory.
//!
//! Sources are tried in a fixed order and the first one that yields a line
//! wins: `README.md`, `description.txt`, `package.json`, then a leading `//`
//! comment in a web source file. A source that cannot be read or parsed is
//! skipped silently.

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;
use std::fs;
use std::path::Path;

const SOURCE_PATTERNS: &[&str] = &["*.js", "*.ts", "*.jsx", "*.tsx", "*.css", "*.scss"];

pub struct DescriptionResolver {
    source_set: GlobSet,
}

impl DescriptionResolver {
    pub fn new() -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pat in SOURCE_PATTERNS {
            builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
        }
        Ok(Self {
            source_set: builder.build()?,
        })
    }

    /// Returns the description, already prefixed with `# `.
    pub fn resolve(&self, dir: &Path) -> Option<String> {
        let found = from_readme(dir)
            .or_else(|| from_description_txt(dir))
            .or_else(|| from_package_json(dir))
            .or_else(|| self.scan_sources(dir))?;
        Some(format!("# {}", found))
    }

    fn scan_sources(&self, dir: &Path) -> Option<String> {
        let mut candidates: Vec<_> = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| {
                    path.file_name()
                        .is_some_and(|name| self.source_set.is_match(name))
                })
                .collect(),
            Err(err) => {
                log::debug!("Skipping source scan of {:?}: {}", dir, err);
                return None;
            }
        };
        candidates.sort();

        candidates.iter().find_map(|path| {
            if !path.is_file() {
                return None;
            }
            let content = read_source(path)?;
            first_line(&content, |line| line.trim().starts_with("//"))
                .map(|line| strip_comment_marker(line).to_string())
        })
    }
}

fn from_readme(dir: &Path) -> Option<String> {
    let content = read_source(&dir.join("README.md"))?;
    let line = first_line(&content, |line| !line.trim().is_empty())?;
    Some(line.trim_start_matches('#').trim_start().to_string())
}

fn from_description_txt(dir: &Path) -> Option<String> {
    let content = read_source(&dir.join("description.txt"))?;
    Some(first_line(&content, |_| true).unwrap_or_default().to_string())
}

fn from_package_json(dir: &Path) -> Option<String> {
    let path = dir.join("package.json");
    let content = read_source(&path)?;
    let manifest: Value = match serde_json::from_str(&content) {
        Ok(manifest) => manifest,
        Err(err) => {
            log::debug!("Ignoring unparsable {:?}: {}", path, err);
            return None;
        }
    };

    let description = manifest.as_object()?.get("description")?;
    if is_blank(description) {
        return None;
    }
    Some(display_value(description))
}

/// `null`, `false`, zero and the empty string do not count as a description.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Renders a JSON value the way it reads when interpolated into text:
/// strings bare, arrays comma-joined, objects as an opaque marker.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// Reads a candidate file; any failure means "not there".
fn read_source(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            log::debug!("Ignoring unreadable {:?}: {}", path, err);
            None
        }
    }
}

/// First `\n`-separated line accepted by `pred`, minus any trailing `\r`.
fn first_line(content: &str, pred: impl Fn(&str) -> bool) -> Option<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .find(|line| pred(line))
}

/// Drops a `//` at the very start of the line and the whitespace after it.
fn strip_comment_marker(line: &str) -> &str {
    match line.strip_prefix("//") {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn resolve(dir: &Path) -> Option<String> {
        DescriptionResolver::new().unwrap().resolve(dir)
    }

    #[test]
    fn nothing_to_go_on() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("main.rs"), "// not a web source\n").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        assert_eq!(resolve(dir.path()), None);
    }

    #[test]
    fn readme_heading_is_stripped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "\n   \n## Title\nmore\n").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# Title"));
    }

    #[test]
    fn readme_strip_is_anchored_at_line_start() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "   ## Indented\n").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# ## Indented"));
    }

    #[test]
    fn blank_readme_falls_through() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "\n  \n\t\n").unwrap();
        fs::write(dir.path().join("description.txt"), "From description\nsecond\n").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# From description"));
    }

    #[test]
    fn readme_wins_over_everything() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "MyProj\r\n").unwrap();
        fs::write(dir.path().join("description.txt"), "other").unwrap();
        fs::write(dir.path().join("package.json"), r#"{"description": "pkg"}"#).unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# MyProj"));
    }

    #[test]
    fn description_txt_is_taken_literally() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("description.txt"), "## kept as is\n").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# ## kept as is"));
    }

    #[test]
    fn empty_description_txt_still_wins() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("description.txt"), "").unwrap();
        fs::write(dir.path().join("package.json"), r#"{"description": "pkg"}"#).unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# "));
    }

    #[test]
    fn package_json_description() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "x", "description": "X"}"#,
        )
        .unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# X"));
    }

    #[test]
    fn invalid_package_json_falls_through_to_sources() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{ not json").unwrap();
        fs::write(dir.path().join("index.js"), "import x from 'y';\n// Entry point\n").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# Entry point"));
    }

    #[test]
    fn package_json_without_usable_description_falls_through() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"description": ""}"#).unwrap();
        assert_eq!(resolve(dir.path()), None);

        fs::write(dir.path().join("package.json"), r#"{"name": "x"}"#).unwrap();
        assert_eq!(resolve(dir.path()), None);

        for falsy in ["null", "false", "0", "0.0"] {
            let manifest = format!(r#"{{"description": {}}}"#, falsy);
            fs::write(dir.path().join("package.json"), manifest).unwrap();
            assert_eq!(resolve(dir.path()), None, "description {}", falsy);
        }
    }

    #[test]
    fn package_json_must_be_an_object() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"["not a description"]"#).unwrap();
        fs::write(dir.path().join("index.js"), "// from source
").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# from source"));
    }

    #[test]
    fn package_json_non_string_descriptions_are_rendered() {
        let dir = tempdir().unwrap();
        let cases = [
            ("42", "# 42"),
            ("true", "# true"),
            ("1.5", "# 1.5"),
            (r#"["a", 1]"#, "# a,1"),
            (r#"{"k": "v"}"#, "# [object Object]"),
        ];
        for (raw, expected) in cases {
            let manifest = format!(r#"{{"description": {}}}"#, raw);
            fs::write(dir.path().join("package.json"), manifest).unwrap();
            assert_eq!(resolve(dir.path()).as_deref(), Some(expected), "description {}", raw);
        }
    }

    #[test]
    fn source_files_are_scanned_in_name_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.ts"), "// from b\n").unwrap();
        fs::write(dir.path().join("a.css"), "body {}\n").unwrap();
        fs::write(dir.path().join("c.scss"), "// from c\n").unwrap();
        fs::write(dir.path().join("a.py"), "// not scanned\n").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# from b"));
    }

    #[test]
    fn indented_comment_keeps_its_marker() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.jsx"), "  // indented\n").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("#   // indented"));
    }

    #[test]
    fn directories_with_source_names_are_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a.js")).unwrap();
        fs::write(dir.path().join("b.js"), "//b\n").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# b"));
    }

    #[test]
    fn unreadable_sources_are_absorbed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), b"\xff\xfe\x00").unwrap();
        fs::write(dir.path().join("description.txt"), "fallback").unwrap();
        assert_eq!(resolve(dir.path()).as_deref(), Some("# fallback"));
    }
}
