//! AST to document walk.

use super::schema::{ColumnDoc, ConditionDoc, NodeDoc, OperandDoc, TableDoc};
use crate::ast::{Column, CompareOp, Condition, Literal, Operand, RelNode, Table};

impl From<&RelNode> for NodeDoc {
    fn from(node: &RelNode) -> Self {
        match node {
            RelNode::BaseRelation { tables } => Self::BaseRelation {
                tables: tables.iter().map(TableDoc::from).collect(),
            },
            RelNode::Project { input, columns } => Self::Project {
                columns: columns.iter().map(ColumnDoc::from).collect(),
                input: Box::new(input.as_ref().into()),
            },
            RelNode::Select { input, condition } => Self::Select {
                condition: condition.into(),
                input: Box::new(input.as_ref().into()),
            },
            RelNode::Join {
                left,
                right,
                condition,
            } => Self::Join {
                condition: condition.into(),
                left: Box::new(left.as_ref().into()),
                right: Box::new(right.as_ref().into()),
            },
            RelNode::Subquery { inner, alias } => Self::Subquery {
                alias: alias.clone(),
                query: Box::new(inner.as_ref().into()),
            },
            RelNode::Rename {
                input,
                old_name,
                new_name,
            } => Self::Rename {
                old_name: old_name.clone(),
                new_name: new_name.clone(),
                input: Box::new(input.as_ref().into()),
            },
        }
    }
}

impl From<&Table> for TableDoc {
    fn from(table: &Table) -> Self {
        Self {
            name: table.name.clone(),
            alias: table.alias.clone(),
        }
    }
}

impl From<&Column> for ColumnDoc {
    fn from(column: &Column) -> Self {
        Self {
            table: column.table.clone(),
            attr: column.attr.clone(),
        }
    }
}

impl From<&Operand> for OperandDoc {
    fn from(operand: &Operand) -> Self {
        match operand {
            Operand::Literal(Literal::Int(value)) => Self::Int { value: *value },
            Operand::Literal(Literal::Float(value)) => Self::Float { value: *value },
            Operand::Literal(Literal::String(value)) => Self::String {
                value: value.clone(),
            },
            Operand::Column(column) => Self::Column {
                table: column.table.clone(),
                attr: column.attr.clone(),
            },
        }
    }
}

impl From<&Condition> for ConditionDoc {
    fn from(condition: &Condition) -> Self {
        match condition {
            Condition::Comparison { op, left, right } => {
                let left = ColumnDoc::from(left);
                let right = OperandDoc::from(right);
                match op {
                    CompareOp::Eq => Self::Eq { left, right },
                    CompareOp::Lt => Self::Lt { left, right },
                    CompareOp::Gt => Self::Gt { left, right },
                    CompareOp::Le => Self::Le { left, right },
                    CompareOp::Ge => Self::Ge { left, right },
                    CompareOp::Ne => Self::Ne { left, right },
                }
            }
            Condition::And { left, right } => Self::And {
                left: Box::new(left.as_ref().into()),
                right: Box::new(right.as_ref().into()),
            },
            Condition::Or { left, right } => Self::Or {
                left: Box::new(left.as_ref().into()),
                right: Box::new(right.as_ref().into()),
            },
            Condition::Not { inner } => Self::Not {
                cond: Box::new(inner.as_ref().into()),
            },
        }
    }
}
