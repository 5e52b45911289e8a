use finflow_templates::ConnectorStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelNode {
  pub id: String,
  pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelEdge {
  pub source: String,
  pub target: String,
}

/// Main workflow node (by final label) -> parallel node (by id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartConnector {
  pub from_label: String,
  pub to_node: String,
  pub style: ConnectorStyle,
}

/// Parallel node (by id) -> main workflow node (by final label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndConnector {
  pub from_node: String,
  pub to_label: String,
  pub style: ConnectorStyle,
}

/// An active parallel branch shown alongside the main workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelWorkflow {
  pub id: String,
  pub label: String,
  pub nodes: Vec<ParallelNode>,
  pub edges: Vec<ParallelEdge>,
  pub start_connectors: Vec<StartConnector>,
  pub end_connectors: Vec<EndConnector>,
}

impl ParallelWorkflow {
  /// Position of a parallel node within this branch.
  pub fn node_index(&self, id: &str) -> Option<usize> {
    self.nodes.iter().position(|n| n.id == id)
  }
}
