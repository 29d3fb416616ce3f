//! AST-backed analysis of Go source.
//!
//! This module owns everything the checker consumes as given services:
//! parsing source files into tree-sitter trees, grouping files into
//! compilation units (one Go package per directory), and resolving struct
//! types into a lookup table.
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌───────────────┐
//! │ Source Files │────▶│ SourceUnits │────▶│ TypeTable     │
//! └──────────────┘     │ (ParsedFile │     │ (StructType   │
//!                      │  per file)  │     │  per package) │
//!                      └─────────────┘     └───────────────┘
//! ```

mod package;
mod source;
mod types;

pub use package::{load_units, SourceUnit};
pub use source::{GoParser, ParsedFile, Span};
pub use types::{
    extract_imports, extract_package, extract_structs, is_exported, ImportMap, StructField,
    StructType, TypeTable,
};
