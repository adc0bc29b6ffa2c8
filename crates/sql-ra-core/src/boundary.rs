//! Request and response envelopes of the optimizer endpoints.
//!
//! Only the shapes are defined here; transport is left to the caller.

use serde::{Deserialize, Serialize};

use crate::ast::RelNode;
use crate::document::{to_document, NodeDoc};

/// Body posted to an optimizer endpoint: `{"relational_algebra": <document>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub relational_algebra: NodeDoc,
}

impl OptimizeRequest {
    /// Wraps a tree in a request envelope.
    #[must_use]
    pub fn new(node: &RelNode) -> Self {
        Self {
            relational_algebra: to_document(node),
        }
    }
}

/// Body returned by an optimizer endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_plan_json: Option<NodeDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_plan_json: Option<NodeDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_plan_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_plan_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_plan_svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_plan_svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OptimizeResponse {
    /// Returns the cost reduction reported by the optimizer, if both costs
    /// are present.
    #[must_use]
    pub fn cost_saving(&self) -> Option<f64> {
        Some(self.original_cost? - self.optimized_cost?)
    }
}
