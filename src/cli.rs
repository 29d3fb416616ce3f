//! Command-line interface for structinit.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::check::Runner;
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Exhaustive struct literal checker for Go.
///
/// structinit flags struct literals that leave fields uninitialized when
/// the enclosing var declaration is tagged `//structinit:exhaustive`.
/// Fields listed in `//structinit:exhaustive,omit=A,B` are excused.
#[derive(Parser)]
#[command(name = "structinit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check Go sources for non-exhaustive tagged struct literals
    #[command(visible_alias = "lint")]
    Check(CheckArgs),
}

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    /// Path to check (file or directory)
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Collect Go files to scan.
///
/// Hidden directories and vendor trees are skipped; `_test.go` files are
/// checked like any other source, since the directive is an explicit
/// opt-in.
fn collect_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            if e.file_type().is_dir() && name.starts_with('.') {
                return false;
            }
            if e.file_type().is_dir() && name == "vendor" {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("go") {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Run the check command.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let abs_path = match args.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let metadata = std::fs::metadata(&abs_path)?;

    // A single file is checked against the package in its directory, so
    // sibling types and directives still resolve.
    let (root, files) = if metadata.is_dir() {
        (abs_path.clone(), collect_files(&abs_path)?)
    } else {
        let root = abs_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (root, vec![abs_path.clone()])
    };

    if files.is_empty() {
        eprintln!("Warning: no Go files to scan");
        return Ok(EXIT_SUCCESS);
    }

    let runner = Runner::new(&root);
    let result = runner.run(&files)?;

    let path_str = args.path.to_string_lossy().to_string();

    match args.format.as_str() {
        "json" => report::write_json(&path_str, &result)?,
        _ => report::write_pretty(&path_str, &result),
    }

    if result.is_clean() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}
