//! Relational algebra operator tree.

use std::fmt;

use super::condition::{Column, Condition};

/// A table reference in a base relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Alias (consumers default it to the name when absent).
    pub alias: Option<String>,
}

impl Table {
    /// Creates a table reference without alias.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Adds an alias to this table reference.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The name columns use to qualify this table: the alias, or the name.
    #[must_use]
    pub fn exposed_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) if *alias != self.name => write!(f, "{} AS {alias}", self.name),
            _ => f.write_str(&self.name),
        }
    }
}

/// A relational algebra operator.
///
/// Every node exclusively owns its children; the tree is built once by the
/// parser and not mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum RelNode {
    /// Leaf scanning one or more tables.
    BaseRelation { tables: Vec<Table> },
    /// Projection onto an ordered column list.
    Project {
        input: Box<RelNode>,
        columns: Vec<Column>,
    },
    /// Selection by a condition.
    Select {
        input: Box<RelNode>,
        condition: Condition,
    },
    /// Binary join; chains are left-deep.
    Join {
        left: Box<RelNode>,
        right: Box<RelNode>,
        condition: Condition,
    },
    /// Parenthesized query exposed under an alias.
    Subquery { inner: Box<RelNode>, alias: String },
    /// Rename of a relation. Never produced by the parser.
    Rename {
        input: Box<RelNode>,
        old_name: String,
        new_name: String,
    },
}

impl RelNode {
    /// Creates a base relation over a single table.
    #[must_use]
    pub fn base(table: Table) -> Self {
        Self::BaseRelation {
            tables: vec![table],
        }
    }

    /// Wraps this node in a projection.
    #[must_use]
    pub fn project(self, columns: Vec<Column>) -> Self {
        Self::Project {
            input: Box::new(self),
            columns,
        }
    }

    /// Wraps this node in a selection.
    #[must_use]
    pub fn select(self, condition: Condition) -> Self {
        Self::Select {
            input: Box::new(self),
            condition,
        }
    }

    /// Joins this node (left) with `right`.
    #[must_use]
    pub fn join(self, right: Self, condition: Condition) -> Self {
        Self::Join {
            left: Box::new(self),
            right: Box::new(right),
            condition,
        }
    }

    /// Wraps this node as an aliased subquery.
    #[must_use]
    pub fn subquery(self, alias: impl Into<String>) -> Self {
        Self::Subquery {
            inner: Box::new(self),
            alias: alias.into(),
        }
    }

    /// Returns the discriminator used in serialized documents.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BaseRelation { .. } => "base_relation",
            Self::Project { .. } => "project",
            Self::Select { .. } => "select",
            Self::Join { .. } => "join",
            Self::Subquery { .. } => "subquery",
            Self::Rename { .. } => "rename",
        }
    }

    /// Counts `Join` nodes in the whole tree, subqueries included.
    #[must_use]
    pub fn join_count(&self) -> usize {
        match self {
            Self::BaseRelation { .. } => 0,
            Self::Join { left, right, .. } => 1 + left.join_count() + right.join_count(),
            Self::Project { input, .. }
            | Self::Select { input, .. }
            | Self::Rename { input, .. }
            | Self::Subquery { inner: input, .. } => input.join_count(),
        }
    }

    /// Collects the leaf tables in left-to-right order.
    #[must_use]
    pub fn base_tables(&self) -> Vec<&Table> {
        let mut out = Vec::new();
        self.collect_tables(&mut out);
        out
    }

    fn collect_tables<'a>(&'a self, out: &mut Vec<&'a Table>) {
        match self {
            Self::BaseRelation { tables } => out.extend(tables),
            Self::Join { left, right, .. } => {
                left.collect_tables(out);
                right.collect_tables(out);
            }
            Self::Project { input, .. }
            | Self::Select { input, .. }
            | Self::Rename { input, .. }
            | Self::Subquery { inner: input, .. } => input.collect_tables(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Literal;

    #[test]
    fn test_table_alias() {
        let t = Table::new("users").alias("u");
        assert_eq!(t.exposed_name(), "u");
        assert_eq!(t.to_string(), "users AS u");
        assert_eq!(Table::new("users").exposed_name(), "users");
        assert_eq!(Table::new("a").alias("a").to_string(), "a");
    }

    #[test]
    fn test_builders_shape() {
        let cond = Condition::eq(Column::new("a", "id"), Column::new("b", "aid"));
        let node = RelNode::base(Table::new("a"))
            .join(RelNode::base(Table::new("b")), cond)
            .select(Condition::eq(Column::new("a", "id"), Literal::Int(1)))
            .project(vec![Column::wildcard()]);
        assert_eq!(node.kind(), "project");
        assert_eq!(node.join_count(), 1);
        let names: Vec<_> = node.base_tables().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_join_count_through_subquery() {
        let inner = RelNode::base(Table::new("x"))
            .join(
                RelNode::base(Table::new("y")),
                Condition::eq(Column::new("x", "id"), Column::new("y", "id")),
            )
            .project(vec![Column::new("x", "id")]);
        let node = inner.subquery("t").project(vec![Column::new("t", "id")]);
        assert_eq!(node.join_count(), 1);
    }
}
