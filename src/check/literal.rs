//! Extracting the explicitly keyed fields of a composite literal.

use std::collections::BTreeSet;

use tree_sitter::Node;

use crate::analysis::ParsedFile;

/// The set of field names a composite literal explicitly keys.
///
/// Positional elements and computed keys contribute nothing; the check only
/// reasons about keyed initialization.
pub fn keyed_fields(parsed: &ParsedFile, literal: Node) -> BTreeSet<String> {
    let mut fields = BTreeSet::new();

    let body = match literal.child_by_field_name("body") {
        Some(b) => b,
        None => return fields,
    };

    for element in body
        .named_children(&mut body.walk())
        .filter(|n| n.kind() == "keyed_element")
    {
        let key = match element
            .child_by_field_name("key")
            .or_else(|| element.named_child(0))
        {
            Some(k) => k,
            None => continue,
        };

        if matches!(key.kind(), "field_identifier" | "identifier") {
            fields.insert(parsed.node_text(key).to_string());
        }
    }

    fields
}
