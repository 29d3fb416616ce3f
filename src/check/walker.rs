//! Syntax tree traversal with an explicit ancestor stack.
//!
//! The walker maintains a growable stack of node references pushed and
//! popped around recursive descent and hands the callback a read-only
//! slice view, root first, current node last. Callbacks never mutate the
//! tree or the stack.

use tree_sitter::Node;

/// Walk the tree under `root`, invoking `visit` once per composite
/// literal with the ancestor stack for that node.
pub fn walk_literals<'t, F>(root: Node<'t>, visit: &mut F)
where
    F: FnMut(Node<'t>, &[Node<'t>]),
{
    let mut stack = Vec::new();
    descend(root, &mut stack, visit);
}

fn descend<'t, F>(node: Node<'t>, stack: &mut Vec<Node<'t>>, visit: &mut F)
where
    F: FnMut(Node<'t>, &[Node<'t>]),
{
    stack.push(node);

    if node.kind() == "composite_literal" {
        visit(node, stack);
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    for child in children {
        descend(child, stack, visit);
    }

    stack.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::GoParser;
    use std::path::Path;

    #[test]
    fn test_visits_every_literal_once() {
        let source = r#"
package test

func main() {
	var _ = A{}
	var _ = B{X: C{}}
	use(D{})
}
"#;
        let parsed = GoParser::new()
            .parse(Path::new("test.go"), source.as_bytes())
            .unwrap();

        let mut names = Vec::new();
        walk_literals(parsed.tree.root_node(), &mut |lit, _| {
            let ty = lit.child_by_field_name("type").unwrap();
            names.push(parsed.node_text(ty).to_string());
        });

        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_stack_runs_root_to_current() {
        let source = r#"
package test

func main() {
	var _ = A{}
}
"#;
        let parsed = GoParser::new()
            .parse(Path::new("test.go"), source.as_bytes())
            .unwrap();

        let mut seen = false;
        walk_literals(parsed.tree.root_node(), &mut |lit, stack| {
            seen = true;
            assert_eq!(stack.first().unwrap().kind(), "source_file");
            assert_eq!(stack.last().unwrap().id(), lit.id());
            assert!(stack.iter().any(|n| n.kind() == "var_declaration"));
        });
        assert!(seen);
    }

    #[test]
    fn test_no_literals_no_visits() {
        let parsed = GoParser::new()
            .parse(Path::new("test.go"), b"package test\n\nfunc main() {}\n")
            .unwrap();

        let mut count = 0;
        walk_literals(parsed.tree.root_node(), &mut |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
