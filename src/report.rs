//! Output formatting for check results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::check::{CheckResult, Finding};

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub files_scanned: usize,
    pub findings: Vec<Finding>,
    pub passed: bool,
}

/// Write results in JSON format.
pub fn write_json(path: &str, result: &CheckResult) -> anyhow::Result<()> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        files_scanned: result.scanned,
        findings: result.findings.clone(),
        passed: result.is_clean(),
    };

    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

/// Write results as colored terminal output.
pub fn write_pretty(path: &str, result: &CheckResult) {
    for finding in &result.findings {
        println!(
            "{}: {}",
            format!("{}:{}:{}", finding.file, finding.line, finding.col).bold(),
            finding.message
        );
    }

    if !result.findings.is_empty() {
        println!();
    }

    let summary = format!(
        "{} file(s) scanned in {}",
        result.scanned,
        if path.is_empty() { "." } else { path }
    );

    if result.is_clean() {
        println!("{} {}", "ok".green().bold(), summary);
    } else {
        println!(
            "{} {} ({} finding(s))",
            "FAIL".red().bold(),
            summary,
            result.findings.len()
        );
    }
}
