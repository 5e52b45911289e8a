use finflow_templates::EdgeStyle;
use serde::{Deserialize, Serialize};

/// A transition between two nodes of a derived graph, by final label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
  pub id: String,
  pub source: String,
  pub target: String,
  #[serde(default)]
  pub label: String,
  pub style: EdgeStyle,
  #[serde(default)]
  pub guard: String,
}

impl FlowEdge {
  /// A solid edge with no label or guard.
  pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
    let source = source.into();
    let target = target.into();
    Self {
      id: format!("{}-{}", source, target),
      source,
      target,
      label: String::new(),
      style: EdgeStyle::Solid,
      guard: String::new(),
    }
  }

  pub fn with_style(mut self, style: EdgeStyle) -> Self {
    self.style = style;
    self
  }

  pub fn with_label(mut self, label: impl Into<String>) -> Self {
    self.label = label.into();
    self
  }

  pub fn with_guard(mut self, guard: impl Into<String>) -> Self {
    self.guard = guard.into();
    self
  }

  /// Dedupe key. Two edges with the same key are the same transition.
  pub fn key(&self) -> String {
    edge_key(&self.source, &self.target)
  }
}

pub(crate) fn edge_key(source: &str, target: &str) -> String {
  format!("{}->{}", source, target)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_edge_id_and_key() {
    let edge = FlowEdge::new("Pending", "Rejected")
      .with_style(EdgeStyle::Red)
      .with_label("Failed");

    assert_eq!(edge.id, "Pending-Rejected");
    assert_eq!(edge.key(), "Pending->Rejected");
    assert_eq!(edge.style.description(), "Error/Rejection");
    assert!(edge.guard.is_empty());
  }
}
