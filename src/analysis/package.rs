//! Compilation unit loading.
//!
//! One Go package per directory. A unit's identity is its directory path
//! relative to the analysis root ('/'-separated); the root directory itself
//! is identified by its package clause name, so qualified type names read
//! like import-path-qualified Go type names.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::source::{GoParser, ParsedFile};
use super::types::extract_package;

/// A compilation unit: all parsed files of one package directory.
pub struct SourceUnit {
    /// Unit identity, e.g. `test` or `internal/models`.
    pub path: String,
    /// The package clause name.
    pub name: String,
    /// Parsed files, ordered by path.
    pub files: Vec<ParsedFile>,
}

/// Parse the given files and group them into units by directory.
///
/// Unreadable or unparseable files are warned about and skipped; a partial
/// view of the tree must never abort the whole check.
pub fn load_units(root: &Path, files: &[PathBuf]) -> anyhow::Result<Vec<SourceUnit>> {
    let parser = GoParser::new();
    let mut by_dir: BTreeMap<PathBuf, Vec<ParsedFile>> = BTreeMap::new();

    for file in files {
        let source = match fs::read(file) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", file.display(), e);
                continue;
            }
        };

        let mut parsed = match parser.parse(file, &source) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Warning: {}", e);
                continue;
            }
        };

        parsed.path = file
            .strip_prefix(root)
            .unwrap_or(file)
            .to_string_lossy()
            .to_string();

        let dir = file.parent().unwrap_or(Path::new("")).to_path_buf();
        by_dir.entry(dir).or_default().push(parsed);
    }

    let mut units = Vec::new();

    for (dir, mut files) in by_dir {
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let name = files
            .iter()
            .find_map(extract_package)
            .unwrap_or_else(|| "main".to_string());

        units.push(SourceUnit {
            path: unit_path(root, &dir, &name),
            name,
            files,
        });
    }

    Ok(units)
}

/// Derive a unit identity from its directory.
fn unit_path(root: &Path, dir: &Path, package_name: &str) -> String {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    if rel.as_os_str().is_empty() {
        return package_name.to_string();
    }
    let components: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    components.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_units_groups_by_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        fs::create_dir_all(temp.path().join("b")).unwrap();

        let a1 = temp.path().join("a/one.go");
        let a2 = temp.path().join("a/two.go");
        let b1 = temp.path().join("b/one.go");
        fs::write(&a1, "package a\n").unwrap();
        fs::write(&a2, "package a\n").unwrap();
        fs::write(&b1, "package b\n").unwrap();

        let units = load_units(temp.path(), &[a1, a2, b1]).unwrap();

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].path, "a");
        assert_eq!(units[0].name, "a");
        assert_eq!(units[0].files.len(), 2);
        assert_eq!(units[1].path, "b");
        assert_eq!(units[1].files.len(), 1);
    }

    #[test]
    fn test_root_unit_named_after_package_clause() {
        let temp = TempDir::new().unwrap();
        let main_go = temp.path().join("main.go");
        fs::write(&main_go, "package widgets\n").unwrap();

        let units = load_units(temp.path(), &[main_go]).unwrap();

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].path, "widgets");
        assert_eq!(units[0].files[0].path, "main.go");
    }

    #[test]
    fn test_nested_unit_path_uses_slashes() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("internal/models")).unwrap();
        let f = temp.path().join("internal/models/m.go");
        fs::write(&f, "package models\n").unwrap();

        let units = load_units(temp.path(), &[f]).unwrap();
        assert_eq!(units[0].path, "internal/models");
    }

    #[test]
    fn test_unreadable_file_skipped() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.go");

        let units = load_units(temp.path(), &[missing]).unwrap();
        assert!(units.is_empty());
    }
}
