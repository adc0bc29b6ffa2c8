//! Canonical JSON document for relational algebra trees.
//!
//! This is the contract consumed by the optimizer and the plan visualizer:
//!
//! ```rust
//! use sql_ra_core::{document, parse};
//!
//! let tree = parse("SELECT a.id FROM a WHERE a.id = 5").unwrap();
//! assert_eq!(
//!     document::to_json(&tree).unwrap(),
//!     concat!(
//!         r#"{"type":"project","columns":[{"table":"a","attr":"id"}],"#,
//!         r#""input":{"type":"select","condition":{"type":"EQ","#,
//!         r#""left":{"table":"a","attr":"id"},"right":{"type":"int","value":5}},"#,
//!         r#""input":{"type":"base_relation","tables":[{"name":"a"}]}}}"#,
//!     )
//! );
//! ```

mod read;
mod schema;
mod write;

pub use schema::{ColumnDoc, ConditionDoc, NodeDoc, OperandDoc, TableDoc};

use crate::ast::RelNode;

/// Errors reading or writing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Malformed JSON or an object that does not match the schema.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// A `base_relation` with no tables.
    #[error("invalid document: base_relation has an empty table list")]
    EmptyTableList,

    /// A required name is the empty string.
    #[error("invalid document: empty {0}")]
    EmptyName(&'static str),
}

/// Converts a tree into its document form.
#[must_use]
pub fn to_document(node: &RelNode) -> NodeDoc {
    NodeDoc::from(node)
}

/// Serializes a tree as single-line JSON.
///
/// # Errors
///
/// Returns `DocumentError::Json` if serialization fails.
pub fn to_json(node: &RelNode) -> Result<String, DocumentError> {
    Ok(serde_json::to_string(&to_document(node))?)
}

/// Serializes a tree as indented JSON.
///
/// # Errors
///
/// Returns `DocumentError::Json` if serialization fails.
pub fn to_json_pretty(node: &RelNode) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(&to_document(node))?)
}

/// Reads a tree from a JSON document.
///
/// # Errors
///
/// Returns a `DocumentError` if the text is not a valid document or breaks
/// a model invariant (empty table list, empty alias).
pub fn from_json(text: &str) -> Result<RelNode, DocumentError> {
    let doc: NodeDoc = serde_json::from_str(text)?;
    RelNode::try_from(doc)
}

/// Reads a tree from an already parsed JSON value.
///
/// # Errors
///
/// Same as [`from_json`].
pub fn from_value(value: serde_json::Value) -> Result<RelNode, DocumentError> {
    let doc: NodeDoc = serde_json::from_value(value)?;
    RelNode::try_from(doc)
}
