// Hierarchical line tree. Flat lexed lines are reassembled into a tree using
// their level numbers: a line at level L becomes a child of the nearest open
// node at level L-1. Nodes live in an arena and refer to each other by index,
// which gives every node a non-owning parent link for error reporting.

use crate::error::ParseError;
use crate::lexer::GedcomLine;

/// Index of a node in its [`LineTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One line of the transmission, in tree form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNode {
    /// Level number; the synthetic root is -1 so its children sit at 0.
    pub level: i64,
    pub xref_id: Option<String>,
    pub tag: String,
    pub value: Option<String>,
    /// 1-based source line number; 0 for the synthetic root.
    pub line: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Arena-backed tree over all lines of a transmission. The tree is a
/// throwaway: the semantic pass walks it once and the typed document is all
/// that survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTree {
    nodes: Vec<LineNode>,
}

impl LineTree {
    pub const ROOT: NodeId = NodeId(0);

    pub fn node(&self, id: NodeId) -> &LineNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].value.as_deref()
    }

    pub fn line(&self, id: NodeId) -> usize {
        self.nodes[id.0].line
    }

    /// Number of real (non-root) nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Tags of all ancestors from the node's parent up to (excluding) the
    /// synthetic root, each with its line number. Used for unknown-tag
    /// diagnostics.
    pub fn ancestors(&self, id: NodeId) -> Vec<&LineNode> {
        let mut out = Vec::new();
        let mut current = self.nodes[id.0].parent;
        while let Some(pid) = current {
            if pid == Self::ROOT {
                break;
            }
            out.push(&self.nodes[pid.0]);
            current = self.nodes[pid.0].parent;
        }
        out
    }
}

/// Assemble lexed lines into a [`LineTree`].
///
/// Fatal conditions: the first line not being at level 0, and any line whose
/// level is more than one deeper than the deepest open node.
pub fn build(lines: Vec<GedcomLine>) -> Result<LineTree, ParseError> {
    let mut nodes = vec![LineNode {
        level: -1,
        xref_id: None,
        tag: String::new(),
        value: None,
        line: 0,
        parent: None,
        children: Vec::new(),
    }];
    // Stack of open nodes; stack[i] is the open node at level i-1... the root
    // sits at the bottom, so the node at depth d has level d-1.
    let mut stack: Vec<NodeId> = vec![NodeId(0)];

    for line in lines {
        if stack.len() == 1 && line.level != 0 {
            return Err(ParseError::FirstLineNotLevelZero {
                line: line.line,
                level: line.level,
            });
        }
        let top_level = nodes[stack.last().unwrap().0].level;
        if line.level > top_level + 1 {
            return Err(ParseError::LevelSkipped {
                line: line.line,
                level: line.level,
                max: top_level,
            });
        }
        // Pop until the top of the stack is this line's parent.
        while nodes[stack.last().unwrap().0].level >= line.level {
            stack.pop();
        }
        let parent = *stack.last().unwrap();
        let id = NodeId(nodes.len());
        nodes.push(LineNode {
            level: line.level,
            xref_id: line.xref_id,
            tag: line.tag,
            value: line.value,
            line: line.line,
            parent: Some(parent),
            children: Vec::new(),
        });
        nodes[parent.0].children.push(id);
        stack.push(id);
    }

    Ok(LineTree { nodes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::SourceLine;
    use crate::lexer::lex_line;

    fn tree_of(text: &str) -> Result<LineTree, ParseError> {
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, t)| !t.trim().is_empty())
            .map(|(idx, t)| {
                lex_line(&SourceLine {
                    number: idx + 1,
                    text: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        build(lines)
    }

    #[test]
    fn test_builds_hierarchy() {
        let tree = tree_of("0 HEAD\n1 GEDC\n2 VERS 5.5.1\n1 CHAR UTF-8\n0 TRLR\n").unwrap();
        let roots = tree.children(LineTree::ROOT);
        assert_eq!(roots.len(), 2);
        let head = roots[0];
        assert_eq!(tree.tag(head), "HEAD");
        let head_children = tree.children(head);
        assert_eq!(head_children.len(), 2);
        let gedc = head_children[0];
        assert_eq!(tree.tag(gedc), "GEDC");
        let vers = tree.children(gedc)[0];
        assert_eq!(tree.tag(vers), "VERS");
        assert_eq!(tree.value(vers), Some("5.5.1"));
    }

    #[test]
    fn test_child_levels_are_parent_plus_one() {
        let tree = tree_of("0 HEAD\n1 GEDC\n2 VERS 5.5\n1 CHAR ANSEL\n0 @I1@ INDI\n1 NAME X\n")
            .unwrap();
        for id in (0..tree.len()).map(|i| NodeId(i + 1)) {
            let node = tree.node(id);
            let parent = tree.node(node.parent.unwrap());
            assert_eq!(node.level, parent.level + 1);
            assert!(parent.children.contains(&id));
        }
    }

    #[test]
    fn test_pop_back_to_shallower_level() {
        let tree = tree_of("0 A\n1 B\n2 C\n1 D\n").unwrap();
        let a = tree.children(LineTree::ROOT)[0];
        let tags: Vec<_> = tree.children(a).iter().map(|&c| tree.tag(c)).collect();
        assert_eq!(tags, vec!["B", "D"]);
    }

    #[test]
    fn test_first_line_not_level_zero() {
        assert!(matches!(
            tree_of("1 GEDC\n"),
            Err(ParseError::FirstLineNotLevelZero { line: 1, level: 1 })
        ));
    }

    #[test]
    fn test_level_skip_is_fatal() {
        assert!(matches!(
            tree_of("0 HEAD\n1 GEDC\n3 VERS 5.5\n"),
            Err(ParseError::LevelSkipped {
                line: 3,
                level: 3,
                max: 1
            })
        ));
    }

    #[test]
    fn test_ancestors_chain() {
        let tree = tree_of("0 @I1@ INDI\n1 BIRT\n2 DATE 1900\n").unwrap();
        let indi = tree.children(LineTree::ROOT)[0];
        let birt = tree.children(indi)[0];
        let date = tree.children(birt)[0];
        let chain: Vec<_> = tree.ancestors(date).iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(chain, vec!["BIRT", "INDI"]);
    }
}
