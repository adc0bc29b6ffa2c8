//! Human-readable rendering of relational algebra trees.
//!
//! One operator per line, children indented by two spaces:
//!
//! ```text
//! PROJECT [a.id, b.id]
//!   JOIN [a.id = b.aid]
//!     BASE [a]
//!     BASE [b]
//! ```

use std::fmt;

use crate::ast::RelNode;

/// Renders the tree as indented text, one line per operator.
#[must_use]
pub fn tree(node: &RelNode) -> String {
    Tree(node).to_string()
}

struct Tree<'a>(&'a RelNode);

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &RelNode, level: usize) -> fmt::Result {
    let indent = "  ".repeat(level);
    match node {
        RelNode::BaseRelation { tables } => {
            let names: Vec<String> = tables.iter().map(ToString::to_string).collect();
            writeln!(f, "{indent}BASE [{}]", names.join(", "))
        }
        RelNode::Project { columns, .. } => {
            let names: Vec<String> = columns.iter().map(ToString::to_string).collect();
            writeln!(f, "{indent}PROJECT [{}]", names.join(", "))
        }
        RelNode::Select { condition, .. } => writeln!(f, "{indent}SELECT [{condition}]"),
        RelNode::Join { condition, .. } => writeln!(f, "{indent}JOIN [{condition}]"),
        RelNode::Subquery { alias, .. } => writeln!(f, "{indent}SUBQUERY AS {alias}"),
        RelNode::Rename {
            old_name, new_name, ..
        } => writeln!(f, "{indent}RENAME {old_name} -> {new_name}"),
    }?;

    match node {
        RelNode::BaseRelation { .. } => Ok(()),
        RelNode::Join { left, right, .. } => {
            write_node(f, left, level + 1)?;
            write_node(f, right, level + 1)
        }
        RelNode::Project { input, .. }
        | RelNode::Select { input, .. }
        | RelNode::Rename { input, .. }
        | RelNode::Subquery { inner: input, .. } => write_node(f, input, level + 1),
    }
}
