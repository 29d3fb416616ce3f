//! Check runner that orchestrates analysis over compilation units.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{extract_imports, load_units, SourceUnit, TypeTable};

use super::engine::Checker;

/// A diagnostic anchored to a file, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub file: String,
    pub line: usize,
    pub col: usize,
    pub message: String,
}

/// Results of one check run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckResult {
    pub findings: Vec<Finding>,
    /// Number of files scanned.
    pub scanned: usize,
}

impl CheckResult {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Executes the exhaustiveness check against a set of files.
pub struct Runner {
    root: PathBuf,
}

impl Runner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Load units, build the type table, and check every file.
    ///
    /// Units are independent traversals with no shared mutable state, so
    /// they are checked in parallel. Findings are sorted by position for
    /// deterministic output.
    pub fn run(&self, files: &[PathBuf]) -> anyhow::Result<CheckResult> {
        let units = load_units(&self.root, files)?;
        let table = TypeTable::build(&units)?;

        let per_unit: Vec<Vec<Finding>> = units
            .par_iter()
            .map(|unit| check_unit(unit, &table))
            .collect::<anyhow::Result<_>>()?;

        let mut findings: Vec<Finding> = per_unit.into_iter().flatten().collect();
        findings.sort_by(|a, b| {
            (&a.file, a.line, a.col, &a.message).cmp(&(&b.file, b.line, b.col, &b.message))
        });

        Ok(CheckResult {
            findings,
            scanned: units.iter().map(|u| u.files.len()).sum(),
        })
    }
}

/// One sequential traversal per file of the unit.
fn check_unit(unit: &SourceUnit, table: &TypeTable) -> anyhow::Result<Vec<Finding>> {
    let mut findings = Vec::new();

    for parsed in &unit.files {
        let imports = extract_imports(parsed)?;
        let checker = Checker::new(&unit.path, table, &imports);

        for diagnostic in checker.check_file(parsed) {
            findings.push(Finding {
                file: parsed.path.clone(),
                line: diagnostic.span.start_line,
                col: diagnostic.span.start_col,
                message: diagnostic.message,
            });
        }
    }

    Ok(findings)
}
