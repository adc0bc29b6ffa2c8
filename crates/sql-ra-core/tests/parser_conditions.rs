//! Tests for the WHERE/ON condition grammar: precedence, associativity,
//! operands.

mod common;
use common::*;

use sql_ra_core::ast::{CompareOp, Condition, Literal, Operand, RelNode};
use sql_ra_core::document;

fn where_of(condition: &str) -> Condition {
    let (_, input) = project_parts(parse(&format!("SELECT a.v FROM a WHERE {condition}")));
    match input {
        RelNode::Select { condition, .. } => condition,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

#[test]
fn or_of_and() {
    assert_eq!(
        where_of("a.v = 1 OR a.v = 2 AND a.v = 3"),
        eq_int("a", "v", 1).or(eq_int("a", "v", 2).and(eq_int("a", "v", 3)))
    );
}

#[test]
fn and_of_or_with_parentheses() {
    assert_eq!(
        where_of("(a.v = 1 OR a.v = 2) AND a.v = 3"),
        eq_int("a", "v", 1).or(eq_int("a", "v", 2)).and(eq_int("a", "v", 3))
    );
}

#[test]
fn and_is_left_associative() {
    assert_eq!(
        where_of("a.v = 1 AND a.v = 2 AND a.v = 3"),
        eq_int("a", "v", 1).and(eq_int("a", "v", 2)).and(eq_int("a", "v", 3))
    );
}

#[test]
fn or_is_left_associative() {
    assert_eq!(
        where_of("a.v = 1 OR a.v = 2 OR a.v = 3"),
        eq_int("a", "v", 1).or(eq_int("a", "v", 2)).or(eq_int("a", "v", 3))
    );
}

#[test]
fn not_is_right_associative_and_tight() {
    assert_eq!(
        where_of("NOT NOT a.v = 1 AND a.v = 2"),
        eq_int("a", "v", 1).not().not().and(eq_int("a", "v", 2))
    );
}

#[test]
fn not_over_group() {
    assert_eq!(
        where_of("NOT (a.v = 1 OR a.v = 2)"),
        eq_int("a", "v", 1).or(eq_int("a", "v", 2)).not()
    );
}

#[test]
fn redundant_parentheses_are_transparent() {
    assert_eq!(where_of("((a.v = 1))"), eq_int("a", "v", 1));
}

#[test]
fn every_comparison_operator() {
    let cases = [
        ("=", CompareOp::Eq),
        ("<", CompareOp::Lt),
        (">", CompareOp::Gt),
        ("<=", CompareOp::Le),
        (">=", CompareOp::Ge),
        ("<>", CompareOp::Ne),
        ("!=", CompareOp::Ne),
    ];
    for (text, expected) in cases {
        let cond = where_of(&format!("a.v {text} 7"));
        assert_eq!(
            cond,
            Condition::compare(col("a", "v"), expected, Literal::Int(7)),
            "{text}"
        );
    }
}

#[test]
fn literal_operands() {
    let cond = where_of("a.i = -3 AND a.f = 0.25 AND a.s = 'it''s'");
    let expected = Condition::eq(col("a", "i"), Literal::Int(-3))
        .and(Condition::eq(col("a", "f"), Literal::Float(0.25)))
        .and(Condition::eq(
            col("a", "s"),
            Literal::String(String::from("it's")),
        ));
    assert_eq!(cond, expected);
}

#[test]
fn column_operand() {
    let cond = where_of("a.v < b.w.z");
    assert_eq!(
        cond,
        Condition::Comparison {
            op: CompareOp::Lt,
            left: col("a", "v"),
            right: Operand::Column(col("b", "w.z")),
        }
    );
}

#[test]
fn keyword_case_in_conditions() {
    assert_eq!(
        where_of("not a.v = 1 and a.v = 2 or a.v = 3"),
        eq_int("a", "v", 1)
            .not()
            .and(eq_int("a", "v", 2))
            .or(eq_int("a", "v", 3))
    );
}

fn flat_chain(terms: usize, connective: &str) -> String {
    let terms: Vec<String> = (0..terms).map(|i| format!("a.v = {i}")).collect();
    format!("SELECT a.v FROM a WHERE {}", terms.join(connective))
}

#[test]
fn long_flat_chain_serializes() {
    let tree = parse(&flat_chain(200, " AND "));
    let text = document::to_json(&tree).unwrap();
    assert_eq!(text.matches(r#""type":"AND""#).count(), 199);
    assert_eq!(text.matches(r#""type":"EQ""#).count(), 200);

    let (_, input) = project_parts(parse(&flat_chain(100, " OR NOT ")));
    let RelNode::Select { condition, .. } = &input else {
        panic!("Expected SELECT");
    };
    assert_eq!(condition.to_string().matches("NOT (").count(), 99);
    assert!(document::to_json_pretty(&input).is_ok());
}

#[test]
fn oversized_flat_chain_is_rejected() {
    for connective in [" AND ", " OR "] {
        let err = parse_err(&flat_chain(10_000, connective));
        assert_eq!(err.message(), "query is too large");
    }
}
