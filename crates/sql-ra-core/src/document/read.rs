//! Document to AST conversion.

use tracing::trace;

use super::schema::{ColumnDoc, ConditionDoc, NodeDoc, OperandDoc, TableDoc};
use super::DocumentError;
use crate::ast::{Column, CompareOp, Condition, Literal, Operand, RelNode, Table};

impl TryFrom<NodeDoc> for RelNode {
    type Error = DocumentError;

    fn try_from(doc: NodeDoc) -> Result<Self, Self::Error> {
        let node = match doc {
            NodeDoc::BaseRelation { tables } => {
                if tables.is_empty() {
                    return Err(DocumentError::EmptyTableList);
                }
                if tables.iter().any(|t| t.name.is_empty()) {
                    return Err(DocumentError::EmptyName("table"));
                }
                Self::BaseRelation {
                    tables: tables.into_iter().map(Table::from).collect(),
                }
            }
            NodeDoc::Project { columns, input } => Self::Project {
                input: Box::new(Self::try_from(*input)?),
                columns: columns.into_iter().map(Column::from).collect(),
            },
            NodeDoc::Select { condition, input } => Self::Select {
                input: Box::new(Self::try_from(*input)?),
                condition: condition.into(),
            },
            NodeDoc::Join {
                condition,
                left,
                right,
            } => Self::Join {
                left: Box::new(Self::try_from(*left)?),
                right: Box::new(Self::try_from(*right)?),
                condition: condition.into(),
            },
            NodeDoc::Subquery { alias, query } => {
                if alias.is_empty() {
                    return Err(DocumentError::EmptyName("subquery alias"));
                }
                Self::Subquery {
                    inner: Box::new(Self::try_from(*query)?),
                    alias,
                }
            }
            NodeDoc::Rename {
                old_name,
                new_name,
                input,
            } => {
                if new_name.is_empty() {
                    return Err(DocumentError::EmptyName("rename target"));
                }
                Self::Rename {
                    input: Box::new(Self::try_from(*input)?),
                    old_name,
                    new_name,
                }
            }
        };
        trace!(kind = node.kind(), "read node");
        Ok(node)
    }
}

impl From<TableDoc> for Table {
    fn from(doc: TableDoc) -> Self {
        Self {
            name: doc.name,
            alias: doc.alias,
        }
    }
}

impl From<ColumnDoc> for Column {
    fn from(doc: ColumnDoc) -> Self {
        Self {
            table: doc.table,
            attr: doc.attr,
        }
    }
}

impl From<OperandDoc> for Operand {
    fn from(doc: OperandDoc) -> Self {
        match doc {
            OperandDoc::Int { value } => Self::Literal(Literal::Int(value)),
            OperandDoc::Float { value } => Self::Literal(Literal::Float(value)),
            OperandDoc::String { value } => Self::Literal(Literal::String(value)),
            OperandDoc::Column { table, attr } => Self::Column(Column { table, attr }),
        }
    }
}

impl From<ConditionDoc> for Condition {
    fn from(doc: ConditionDoc) -> Self {
        let compare = |op, left: ColumnDoc, right: OperandDoc| Self::Comparison {
            op,
            left: left.into(),
            right: right.into(),
        };
        match doc {
            ConditionDoc::Eq { left, right } => compare(CompareOp::Eq, left, right),
            ConditionDoc::Lt { left, right } => compare(CompareOp::Lt, left, right),
            ConditionDoc::Gt { left, right } => compare(CompareOp::Gt, left, right),
            ConditionDoc::Le { left, right } => compare(CompareOp::Le, left, right),
            ConditionDoc::Ge { left, right } => compare(CompareOp::Ge, left, right),
            ConditionDoc::Ne { left, right } => compare(CompareOp::Ne, left, right),
            ConditionDoc::And { left, right } => Self::And {
                left: Box::new((*left).into()),
                right: Box::new((*right).into()),
            },
            ConditionDoc::Or { left, right } => Self::Or {
                left: Box::new((*left).into()),
                right: Box::new((*right).into()),
            },
            ConditionDoc::Not { cond } => Self::Not {
                inner: Box::new((*cond).into()),
            },
        }
    }
}
