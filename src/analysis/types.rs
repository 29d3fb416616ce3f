//! Struct type extraction and the type lookup table.
//!
//! Struct declarations are extracted per file with tree-sitter queries and
//! collected into a [`TypeTable`] keyed by (unit path, type name). The table
//! is the checker's type resolver: lookups may fail, and a failed lookup is
//! always a silent skip for the caller, never an error.

use std::collections::{BTreeSet, HashMap};

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Query, QueryCursor};

use super::package::SourceUnit;
use super::source::ParsedFile;

/// Tree-sitter query for struct type declarations.
const STRUCT_QUERY: &str = r#"
(type_declaration
  (type_spec
    name: (type_identifier) @name
    type: (struct_type) @struct
  )
)
"#;

/// Tree-sitter query for imports.
const IMPORT_QUERY: &str = r#"
(import_declaration
  (import_spec
    name: (package_identifier)? @alias
    path: (interpreted_string_literal) @path
  )
)

(import_declaration
  (import_spec_list
    (import_spec
      name: (package_identifier)? @alias
      path: (interpreted_string_literal) @path
    )
  )
)
"#;

/// Tree-sitter query for the package clause.
const PACKAGE_QUERY: &str = r#"
(package_clause
  (package_identifier) @package_name
)
"#;

/// A single struct field: name plus the Go exportedness of that name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    pub exported: bool,
}

/// A resolved struct type: ordered fields plus the unit that defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    /// The declared type name.
    pub name: String,
    /// Identity of the compilation unit defining the type.
    pub unit: String,
    /// Declared fields, in source order.
    pub fields: Vec<StructField>,
}

impl StructType {
    /// The unit-qualified name used in diagnostics, e.g. `test.Something`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.unit, self.name)
    }
}

/// Map from import qualifier (alias or last path segment) to import path.
pub type ImportMap = HashMap<String, String>;

/// Whether a Go identifier is exported (first letter uppercase).
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

fn go_language() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Extract the package clause name from a parsed file.
pub fn extract_package(parsed: &ParsedFile) -> Option<String> {
    let language = go_language();
    let query = Query::new(&language, PACKAGE_QUERY).ok()?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, parsed.tree.root_node(), &parsed.source[..]);

    if let Some(m) = matches.next() {
        for capture in m.captures {
            let name = query.capture_names()[capture.index as usize];
            if name == "package_name" {
                return Some(parsed.node_text(capture.node).to_string());
            }
        }
    }
    None
}

/// Extract the import map of a parsed file.
///
/// The qualifier is the alias when one is given, otherwise the final
/// segment of the import path. Dot and blank imports carry no qualifier
/// and are left out.
pub fn extract_imports(parsed: &ParsedFile) -> anyhow::Result<ImportMap> {
    let language = go_language();
    let query = Query::new(&language, IMPORT_QUERY)?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, parsed.tree.root_node(), &parsed.source[..]);

    let mut imports = ImportMap::new();

    while let Some(m) = matches.next() {
        let mut path = String::new();
        let mut alias = None;

        for capture in m.captures {
            let name = query.capture_names()[capture.index as usize];
            match name {
                "path" => {
                    let raw = parsed.node_text(capture.node);
                    path = raw.trim_matches('"').to_string();
                }
                "alias" => {
                    alias = Some(parsed.node_text(capture.node).to_string());
                }
                _ => {}
            }
        }

        if path.is_empty() {
            continue;
        }

        let qualifier = match alias {
            Some(a) => a,
            None => path.rsplit('/').next().unwrap_or(&path).to_string(),
        };
        imports.insert(qualifier, path);
    }

    Ok(imports)
}

/// Extract all struct type declarations from a parsed file.
pub fn extract_structs(parsed: &ParsedFile, unit: &str) -> anyhow::Result<Vec<StructType>> {
    let language = go_language();
    let query = Query::new(&language, STRUCT_QUERY)?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, parsed.tree.root_node(), &parsed.source[..]);

    let mut structs = Vec::new();

    while let Some(m) = matches.next() {
        let mut name = String::new();
        let mut struct_node = None;

        for capture in m.captures {
            let capture_name = query.capture_names()[capture.index as usize];
            match capture_name {
                "name" => name = parsed.node_text(capture.node).to_string(),
                "struct" => struct_node = Some(capture.node),
                _ => {}
            }
        }

        if let (false, Some(node)) = (name.is_empty(), struct_node) {
            structs.push(StructType {
                name,
                unit: unit.to_string(),
                fields: extract_fields(parsed, node),
            });
        }
    }

    Ok(structs)
}

/// Collect the fields of a `struct_type` node, in source order.
fn extract_fields(parsed: &ParsedFile, struct_node: Node) -> Vec<StructField> {
    let mut fields = Vec::new();

    let list = match struct_node
        .named_children(&mut struct_node.walk())
        .find(|n| n.kind() == "field_declaration_list")
    {
        Some(l) => l,
        None => return fields,
    };

    for decl in list
        .named_children(&mut list.walk())
        .filter(|n| n.kind() == "field_declaration")
    {
        let names: Vec<Node> = decl.children_by_field_name("name", &mut decl.walk()).collect();

        if names.is_empty() {
            // Embedded field: the field name is the base name of the type.
            if let Some(name) = decl
                .child_by_field_name("type")
                .and_then(|ty| embedded_field_name(parsed, ty))
            {
                fields.push(StructField {
                    exported: is_exported(name),
                    name: name.to_string(),
                });
            }
            continue;
        }

        for n in names {
            let name = parsed.node_text(n);
            fields.push(StructField {
                exported: is_exported(name),
                name: name.to_string(),
            });
        }
    }

    fields
}

fn embedded_field_name<'a>(parsed: &'a ParsedFile, ty: Node) -> Option<&'a str> {
    match ty.kind() {
        "type_identifier" => Some(parsed.node_text(ty)),
        "qualified_type" => ty
            .child_by_field_name("name")
            .map(|n| parsed.node_text(n)),
        "generic_type" => ty
            .child_by_field_name("type")
            .and_then(|n| embedded_field_name(parsed, n)),
        _ => None,
    }
}

/// Struct type lookup across all analyzed units.
#[derive(Debug, Default)]
pub struct TypeTable {
    structs: HashMap<(String, String), StructType>,
    units: BTreeSet<String>,
}

impl TypeTable {
    /// Build the table from a set of loaded units.
    pub fn build(units: &[SourceUnit]) -> anyhow::Result<Self> {
        let mut table = TypeTable::default();
        for unit in units {
            for parsed in &unit.files {
                for ty in extract_structs(parsed, &unit.path)? {
                    table.insert(ty);
                }
            }
        }
        Ok(table)
    }

    pub fn insert(&mut self, ty: StructType) {
        self.units.insert(ty.unit.clone());
        self.structs.insert((ty.unit.clone(), ty.name.clone()), ty);
    }

    /// Look up a type declared in the given unit.
    pub fn lookup(&self, unit: &str, name: &str) -> Option<&StructType> {
        self.structs.get(&(unit.to_string(), name.to_string()))
    }

    /// Look up a type through an import path.
    ///
    /// Tries an exact unit match first, then the longest unit that is a
    /// '/'-boundary suffix of the import path. Import paths usually carry a
    /// module prefix that unit paths (relative to the analysis root) lack.
    pub fn lookup_import(&self, import_path: &str, name: &str) -> Option<&StructType> {
        if let Some(ty) = self.lookup(import_path, name) {
            return Some(ty);
        }
        self.units
            .iter()
            .filter(|u| import_path.ends_with(&format!("/{u}")))
            .max_by_key(|u| u.len())
            .and_then(|u| self.lookup(u, name))
    }
}
