#![allow(dead_code)]

use sql_ra_core::ast::{Column, Condition, Literal, RelNode, Table};
use sql_ra_core::{ParseError, Parser};

pub fn parse(sql: &str) -> RelNode {
    Parser::new(sql)
        .parse_query()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_query()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

/// Returns the projected columns and the input of the outermost `Project`.
pub fn project_parts(node: RelNode) -> (Vec<Column>, RelNode) {
    match node {
        RelNode::Project { input, columns } => (columns, *input),
        other => panic!("Expected PROJECT, got {other:?}"),
    }
}

pub fn col(table: &str, attr: &str) -> Column {
    Column::new(table, attr)
}

pub fn table(name: &str) -> RelNode {
    RelNode::base(Table::new(name))
}

pub fn eq_int(table: &str, attr: &str, value: i64) -> Condition {
    Condition::eq(col(table, attr), Literal::Int(value))
}

/// Asserts that every comparison in the tree has a column on its left.
/// The type system already enforces it; this walks serialized output.
pub fn assert_left_is_column(doc: &serde_json::Value) {
    match doc {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(kind)) = map.get("type") {
                if ["EQ", "LT", "GT", "LE", "GE", "NE"].contains(&kind.as_str()) {
                    let left = &map["left"];
                    assert!(left.get("table").is_some() && left.get("attr").is_some());
                    assert!(left.get("type").is_none(), "literal on left: {left}");
                }
            }
            map.values().for_each(assert_left_is_column);
        }
        serde_json::Value::Array(items) => items.iter().for_each(assert_left_is_column),
        _ => {}
    }
}
