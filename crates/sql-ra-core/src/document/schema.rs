//! Wire types of the relational algebra document.
//!
//! Every object carries a `type` discriminator as its first field; the
//! remaining fields follow in declaration order. Consumers branch on
//! `type` and on the presence of `input`, `left`/`right` or `query`.

use serde::{Deserialize, Serialize};

/// A relational operator node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeDoc {
    /// `{type: base_relation, tables}`
    BaseRelation { tables: Vec<TableDoc> },
    /// `{type: project, columns, input}`
    Project {
        columns: Vec<ColumnDoc>,
        input: Box<NodeDoc>,
    },
    /// `{type: select, condition, input}`
    Select {
        condition: ConditionDoc,
        input: Box<NodeDoc>,
    },
    /// `{type: join, condition, left, right}`
    Join {
        condition: ConditionDoc,
        left: Box<NodeDoc>,
        right: Box<NodeDoc>,
    },
    /// `{type: subquery, alias, query}`
    Subquery { alias: String, query: Box<NodeDoc> },
    /// `{type: rename, old_name, new_name, input}`
    Rename {
        old_name: String,
        new_name: String,
        input: Box<NodeDoc>,
    },
}

/// `{name, alias?}`; `alias` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDoc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// `{table, attr}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDoc {
    pub table: String,
    pub attr: String,
}

/// A condition object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ConditionDoc {
    Eq { left: ColumnDoc, right: OperandDoc },
    Lt { left: ColumnDoc, right: OperandDoc },
    Gt { left: ColumnDoc, right: OperandDoc },
    Le { left: ColumnDoc, right: OperandDoc },
    Ge { left: ColumnDoc, right: OperandDoc },
    Ne { left: ColumnDoc, right: OperandDoc },
    And {
        left: Box<ConditionDoc>,
        right: Box<ConditionDoc>,
    },
    Or {
        left: Box<ConditionDoc>,
        right: Box<ConditionDoc>,
    },
    Not { cond: Box<ConditionDoc> },
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OperandDoc {
    Int { value: i64 },
    Float { value: f64 },
    String { value: String },
    Column { table: String, attr: String },
}
