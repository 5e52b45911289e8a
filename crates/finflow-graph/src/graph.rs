use std::collections::{BTreeMap, HashSet};

use finflow_templates::Column;
use serde::{Deserialize, Serialize};

use crate::edge::{FlowEdge, edge_key};
use crate::node::StateNode;

/// Columns assumed for a node without an entry in `columns_by_label`.
const DEFAULT_COLUMNS: &[Column] = &[Column::Pending];

/// The nodes, edges and column membership produced for one configuration.
///
/// `columns_by_label` is keyed by final label and serializes in label order,
/// not sequence order; walk `nodes` when the sequence matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedGraph {
  pub nodes: Vec<StateNode>,
  pub edges: Vec<FlowEdge>,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub columns_by_label: BTreeMap<String, Vec<Column>>,
}

impl DerivedGraph {
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Final labels in sequence order.
  pub fn labels(&self) -> Vec<&str> {
    self.nodes.iter().map(|n| n.label.as_str()).collect()
  }

  pub fn node(&self, label: &str) -> Option<&StateNode> {
    self.nodes.iter().find(|n| n.label == label)
  }

  pub fn has_edge(&self, source: &str, target: &str) -> bool {
    let key = edge_key(source, target);
    self.edges.iter().any(|e| e.key() == key)
  }

  /// Columns a node appears in; nodes without an entry default to pending.
  pub fn columns_for(&self, label: &str) -> &[Column] {
    self
      .columns_by_label
      .get(label)
      .map(|v| v.as_slice())
      .unwrap_or(DEFAULT_COLUMNS)
  }

  /// True if every node can reach every other, ignoring edge direction.
  ///
  /// Edges naming labels outside the node set are ignored.
  pub fn is_weakly_connected(&self) -> bool {
    let Some(first) = self.nodes.first() else {
      return true;
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack = vec![first.label.as_str()];
    while let Some(label) = stack.pop() {
      if !seen.insert(label) {
        continue;
      }
      for edge in &self.edges {
        let next = if edge.source == label {
          edge.target.as_str()
        } else if edge.target == label {
          edge.source.as_str()
        } else {
          continue;
        };
        if self.node(next).is_some() && !seen.contains(next) {
          stack.push(next);
        }
      }
    }

    self.nodes.iter().all(|n| seen.contains(n.label.as_str()))
  }
}
