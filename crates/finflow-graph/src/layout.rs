use finflow_templates::Column;
use serde::Serialize;

use crate::graph::DerivedGraph;

/// A node placed in one outcome column.
///
/// A node listed in several columns appears once per column; copies outside the
/// pending column get a `-executed` / `-rejected` suffix on their id so they
/// stay distinct.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnEntry {
  pub id: String,
  pub label: String,
}

/// Derived nodes grouped by outcome column, each column in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnLayout {
  pub pending: Vec<ColumnEntry>,
  pub executed: Vec<ColumnEntry>,
  pub rejected: Vec<ColumnEntry>,
}

impl ColumnLayout {
  pub fn from_graph(graph: &DerivedGraph) -> Self {
    let mut layout = Self::default();
    for node in &graph.nodes {
      for column in graph.columns_for(&node.label) {
        let id = match column {
          Column::Pending => node.id.clone(),
          other => format!("{}-{}", node.id, other.as_str()),
        };
        layout.column_mut(*column).push(ColumnEntry {
          id,
          label: node.label.clone(),
        });
      }
    }
    layout
  }

  pub fn column(&self, column: Column) -> &[ColumnEntry] {
    match column {
      Column::Pending => &self.pending,
      Column::Executed => &self.executed,
      Column::Rejected => &self.rejected,
    }
  }

  fn column_mut(&mut self, column: Column) -> &mut Vec<ColumnEntry> {
    match column {
      Column::Pending => &mut self.pending,
      Column::Executed => &mut self.executed,
      Column::Rejected => &mut self.rejected,
    }
  }

  /// Index of `label` in the pending column.
  pub fn pending_index(&self, label: &str) -> Option<usize> {
    self.pending.iter().position(|e| e.label == label)
  }
}
