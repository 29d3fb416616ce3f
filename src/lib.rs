//! structinit - exhaustive struct literal checker for Go.
//!
//! structinit verifies that struct literals opt-ed in with a directive
//! comment initialize every checkable field. A variable declaration tagged
//!
//! ```go
//! //structinit:exhaustive
//! var cfg = Config{ ... }
//! ```
//!
//! must set all fields of `Config` that are settable from the literal's
//! package; `//structinit:exhaustive,omit=A,B` excuses named fields.
//!
//! # Architecture
//!
//! The codebase uses tree-sitter for AST-based analysis:
//!
//! - `analysis`: parsing, package grouping, and the struct type table
//! - `check`: the directive grammar, field resolution, and the
//!   per-literal exhaustiveness engine
//! - `report`: output formatting (pretty, JSON)
//! - `cli`: command-line driver

pub mod analysis;
pub mod check;
pub mod cli;
pub mod report;

pub use analysis::{GoParser, ParsedFile, SourceUnit, Span, StructField, StructType, TypeTable};
pub use check::{CheckResult, Checker, Diagnostic, Directive, Finding, Runner, DIRECTIVE};
