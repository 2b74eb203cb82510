//! Read-only view of a concrete syntax tree node.
//!
//! The extractor only needs a kind tag, a byte range and ordered children,
//! so it is written against this trait rather than tree-sitter directly.
//! Any tree that can answer these three questions can be walked.

use std::ops::Range;

/// A node in a concrete syntax tree.
///
/// Implementations are cheap handles (`Copy`) into a tree owned elsewhere;
/// the extractor never mutates the tree.
pub trait SyntaxNode: Copy {
    /// Grammar-defined kind tag (e.g. `function_definition`).
    fn kind(&self) -> &str;

    /// Byte range `[start, end)` into the original source buffer.
    fn byte_range(&self) -> Range<usize>;

    /// Line the node starts on (1-indexed).
    fn start_line(&self) -> usize;

    /// Direct children, in document order.
    fn children(&self) -> Vec<Self>;

    /// First direct child whose kind is in `kinds`.
    fn first_child_of(&self, kinds: &[&str]) -> Option<Self> {
        self.children()
            .into_iter()
            .find(|child| kinds.contains(&child.kind()))
    }

    /// Last direct child whose kind is in `kinds`.
    fn last_child_of(&self, kinds: &[&str]) -> Option<Self> {
        self.children()
            .into_iter()
            .rev()
            .find(|child| kinds.contains(&child.kind()))
    }
}

impl<'tree> SyntaxNode for tree_sitter::Node<'tree> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn byte_range(&self) -> Range<usize> {
        tree_sitter::Node::byte_range(self)
    }

    fn start_line(&self) -> usize {
        // tree-sitter rows are 0-indexed
        self.start_position().row + 1
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        let children: Vec<Self> = tree_sitter::Node::children(self, &mut cursor).collect();
        children
    }
}

/// Owned in-memory tree for exercising the extractor without a grammar.
#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    #[derive(Debug)]
    pub struct MockNode {
        pub kind: &'static str,
        pub range: Range<usize>,
        pub line: usize,
        pub children: Vec<MockNode>,
    }

    impl MockNode {
        pub fn new(kind: &'static str, start: usize, end: usize) -> Self {
            Self {
                kind,
                range: start..end,
                line: 1,
                children: Vec::new(),
            }
        }

        pub fn with(mut self, child: MockNode) -> Self {
            self.children.push(child);
            self
        }

        pub fn on_line(mut self, line: usize) -> Self {
            self.line = line;
            self
        }
    }

    impl<'a> SyntaxNode for &'a MockNode {
        fn kind(&self) -> &str {
            self.kind
        }

        fn byte_range(&self) -> Range<usize> {
            self.range.clone()
        }

        fn start_line(&self) -> usize {
            self.line
        }

        fn children(&self) -> Vec<Self> {
            let node: &'a MockNode = *self;
            node.children.iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockNode;
    use super::*;

    #[test]
    fn test_child_lookup_order() {
        let node = MockNode::new("impl_item", 0, 20)
            .with(MockNode::new("type_identifier", 5, 10))
            .with(MockNode::new("for", 11, 14))
            .with(MockNode::new("type_identifier", 15, 18));
        let node = &node;

        let first = node.first_child_of(&["type_identifier"]).unwrap();
        let last = node.last_child_of(&["type_identifier"]).unwrap();
        assert_eq!(first.byte_range(), 5..10);
        assert_eq!(last.byte_range(), 15..18);
        assert!(node.first_child_of(&["block"]).is_none());
    }

    #[test]
    fn test_tree_sitter_node_children() {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        let source = b"def f(a):\n    pass\n";
        let tree = parser.parse(source, None).unwrap();
        let root = tree.root_node();

        let top = SyntaxNode::children(&root);
        assert_eq!(top.len(), 1);
        assert_eq!(SyntaxNode::kind(&top[0]), "function_definition");
        assert_eq!(SyntaxNode::start_line(&top[0]), 1);
        assert!(top[0].first_child_of(&["parameters"]).is_some());
    }
}
