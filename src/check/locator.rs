//! Locating the declaration that carries the directive.
//!
//! The directive lives on the nearest enclosing `var` declaration group.
//! Constant, type, import, and `:=` declarations never carry it.

use tree_sitter::Node;

/// Find the directive candidate comment for the node at the top of the
/// ancestor stack.
///
/// Scans the stack from the nearest ancestor outward for the first
/// `var_declaration`, then returns the last line of its attached
/// documentation block. Returns `None` when there is no enclosing var
/// group or it has no attached comment; the caller treats both as a
/// silent skip.
pub fn locate<'t>(stack: &[Node<'t>]) -> Option<Node<'t>> {
    let decl = stack
        .iter()
        .rev()
        .find(|n| n.kind() == "var_declaration")?;
    doc_comment(*decl)
}

/// The last line of the documentation block attached to a declaration.
///
/// A block attaches the way Go doc comments do: the comment directly above
/// the declaration, with no blank line in between. Earlier lines of the
/// block are ordinary documentation; only the final line can hold the
/// directive, so only it is returned.
fn doc_comment(decl: Node) -> Option<Node> {
    let prev = decl.prev_sibling()?;
    if prev.kind() != "comment" {
        return None;
    }
    if prev.end_position().row + 1 != decl.start_position().row {
        return None;
    }
    Some(prev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{GoParser, ParsedFile};
    use crate::check::walk_literals;
    use std::path::Path;

    fn parse(source: &str) -> ParsedFile {
        GoParser::new()
            .parse(Path::new("test.go"), source.as_bytes())
            .unwrap()
    }

    /// Run the locator at the first composite literal in the source.
    fn locate_at_first_literal(parsed: &ParsedFile) -> Option<String> {
        let mut found = None;
        walk_literals(parsed.tree.root_node(), &mut |_, stack| {
            if found.is_none() {
                found = Some(locate(stack).map(|c| parsed.node_text(c).to_string()));
            }
        });
        found.expect("source should contain a composite literal")
    }

    #[test]
    fn test_directive_above_var_found() {
        let source = r#"
package test

func main() {
	//structinit:exhaustive
	var _ = Something{}
}
"#;
        let parsed = parse(source);
        assert_eq!(
            locate_at_first_literal(&parsed),
            Some("//structinit:exhaustive".to_string())
        );
    }

    #[test]
    fn test_top_level_var_found() {
        let source = r#"
package test

//structinit:exhaustive
var Default = Something{}
"#;
        let parsed = parse(source);
        assert_eq!(
            locate_at_first_literal(&parsed),
            Some("//structinit:exhaustive".to_string())
        );
    }

    #[test]
    fn test_only_last_comment_line_inspected() {
        let source = r#"
package test

func main() {
	// Default holds the baseline configuration.
	//structinit:exhaustive
	var _ = Something{}
}
"#;
        let parsed = parse(source);
        assert_eq!(
            locate_at_first_literal(&parsed),
            Some("//structinit:exhaustive".to_string())
        );
    }

    #[test]
    fn test_directive_not_last_line_returns_following_comment() {
        let source = r#"
package test

func main() {
	//structinit:exhaustive
	// more documentation
	var _ = Something{}
}
"#;
        let parsed = parse(source);
        assert_eq!(
            locate_at_first_literal(&parsed),
            Some("// more documentation".to_string())
        );
    }

    #[test]
    fn test_blank_line_breaks_attachment() {
        let source = r#"
package test

func main() {
	//structinit:exhaustive

	var _ = Something{}
}
"#;
        let parsed = parse(source);
        assert_eq!(locate_at_first_literal(&parsed), None);
    }

    #[test]
    fn test_no_comment_returns_none() {
        let source = r#"
package test

func main() {
	var _ = Something{}
}
"#;
        let parsed = parse(source);
        assert_eq!(locate_at_first_literal(&parsed), None);
    }

    #[test]
    fn test_short_var_declaration_never_matches() {
        let source = r#"
package test

func main() {
	//structinit:exhaustive
	x := Something{}
	_ = x
}
"#;
        let parsed = parse(source);
        assert_eq!(locate_at_first_literal(&parsed), None);
    }

    #[test]
    fn test_no_enclosing_var_group() {
        // A literal outside any var group: the stack holds no
        // var_declaration, so the locator finds nothing.
        let source = r#"
package test

func main() {
	//structinit:exhaustive
	use(Something{})
}
"#;
        let parsed = parse(source);
        assert_eq!(locate_at_first_literal(&parsed), None);
    }
}
