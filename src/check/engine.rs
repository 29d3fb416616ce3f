//! The per-literal exhaustiveness engine.

use tree_sitter::Node;

use crate::analysis::{ImportMap, ParsedFile, Span, StructType, TypeTable};

use super::{directive, fields, literal, locator, walker};

/// A reported finding: position of the offending literal plus message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Span,
    pub message: String,
}

/// Checks one file of one compilation unit.
///
/// Carries the capabilities the check needs from its surroundings: the
/// identity of the unit being analyzed, the type table, and the current
/// file's import map for resolving qualified literal types.
pub struct Checker<'a> {
    unit: &'a str,
    types: &'a TypeTable,
    imports: &'a ImportMap,
}

impl<'a> Checker<'a> {
    pub fn new(unit: &'a str, types: &'a TypeTable, imports: &'a ImportMap) -> Self {
        Self {
            unit,
            types,
            imports,
        }
    }

    /// Walk the file and check every composite literal.
    ///
    /// Diagnostics in one literal never block checking of the rest.
    pub fn check_file(&self, parsed: &ParsedFile) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        walker::walk_literals(parsed.tree.root_node(), &mut |lit, stack| {
            diagnostics.extend(self.check_literal(parsed, lit, stack));
        });
        diagnostics
    }

    /// Check a single composite literal against its directive, if any.
    pub fn check_literal(
        &self,
        parsed: &ParsedFile,
        lit: Node,
        stack: &[Node],
    ) -> Vec<Diagnostic> {
        // Not every composite literal is a struct literal; arrays, maps,
        // and slices resolve to no struct type and pass through untouched.
        let ty = match self.type_of(parsed, lit) {
            Some(t) => t,
            None => return Vec::new(),
        };

        let comment = match locator::locate(stack) {
            Some(c) => c,
            None => return Vec::new(),
        };

        let directive = directive::parse(parsed.node_text(comment));
        if !directive.exhaustive {
            return Vec::new();
        }

        let checkable = fields::checkable_fields(ty, self.unit);
        let omitted = directive.omitted.unwrap_or_default();
        let type_name = ty.qualified_name();

        let mut diagnostics = Vec::new();

        let invalid: Vec<&str> = omitted
            .iter()
            .filter(|name| !checkable.contains(*name))
            .map(String::as_str)
            .collect();

        if !invalid.is_empty() {
            diagnostics.push(Diagnostic {
                span: Span::from_node(lit),
                message: invalid_omit_message(&type_name, &invalid),
            });
        }

        let present = literal::keyed_fields(parsed, lit);

        let missing: Vec<&str> = checkable
            .iter()
            .filter(|name| !omitted.contains(*name) && !present.contains(*name))
            .map(String::as_str)
            .collect();

        if !missing.is_empty() {
            diagnostics.push(Diagnostic {
                span: Span::from_node(lit),
                message: missing_message(&type_name, &missing),
            });
        }

        diagnostics
    }

    /// Resolve the struct type of a composite literal's type expression.
    fn type_of(&self, parsed: &ParsedFile, lit: Node) -> Option<&'a StructType> {
        let ty = lit.child_by_field_name("type")?;
        self.resolve_type_expr(parsed, ty)
    }

    fn resolve_type_expr(&self, parsed: &ParsedFile, ty: Node) -> Option<&'a StructType> {
        match ty.kind() {
            "type_identifier" => self.types.lookup(self.unit, parsed.node_text(ty)),
            "qualified_type" => {
                let package = ty.child_by_field_name("package")?;
                let name = ty.child_by_field_name("name")?;
                let path = self.imports.get(parsed.node_text(package))?;
                self.types.lookup_import(path, parsed.node_text(name))
            }
            // Foo[T]{...}: check against the base struct declaration.
            "generic_type" => {
                let base = ty.child_by_field_name("type")?;
                self.resolve_type_expr(parsed, base)
            }
            _ => None,
        }
    }
}

fn missing_message(type_name: &str, missing: &[&str]) -> String {
    if missing.len() == 1 {
        format!(
            "exhaustive struct literal {} not initialized with field {}",
            type_name, missing[0]
        )
    } else {
        format!(
            "exhaustive struct literal {} not initialized with fields {}",
            type_name,
            missing.join(", ")
        )
    }
}

fn invalid_omit_message(type_name: &str, invalid: &[&str]) -> String {
    if invalid.len() == 1 {
        format!("omitted field {} is not a field of {}", invalid[0], type_name)
    } else {
        format!(
            "omitted fields {} are not fields of {}",
            invalid.join(", "),
            type_name
        )
    }
}
