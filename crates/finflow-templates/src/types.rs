use serde::{Deserialize, Serialize};

/// Outcome lane a node may appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
  Pending,
  Executed,
  Rejected,
}

impl Column {
  pub const ALL: [Column; 3] = [Column::Pending, Column::Executed, Column::Rejected];

  pub fn as_str(&self) -> &'static str {
    match self {
      Column::Pending => "pending",
      Column::Executed => "executed",
      Column::Rejected => "rejected",
    }
  }
}

/// Feature grouping of a node template; the key for inclusion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
  Core,
  ExpenseManagement,
  PreAccounting,
  Compliance,
  Approvals,
  SignOff,
  Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
  #[default]
  Solid,
  Dashed,
  Red,
}

impl EdgeStyle {
  /// What a transition drawn in this style means.
  pub fn description(&self) -> &'static str {
    match self {
      EdgeStyle::Solid => "Required Path",
      EdgeStyle::Dashed => "Bypass/Fast-track",
      EdgeStyle::Red => "Error/Rejection",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorStyle {
  #[default]
  Solid,
  Dashed,
  Dotted,
}

/// A candidate lifecycle state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateNodeTemplate {
  pub id: &'static str,
  pub label: &'static str,
  pub badges: &'static [&'static str],
  pub category: Category,
  pub columns: &'static [Column],
}

/// A candidate transition between two node templates, by id.
///
/// Endpoints are not validated: an edge naming an undeclared node simply never
/// survives filtering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeTemplate {
  pub source: &'static str,
  pub target: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub style: Option<EdgeStyle>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub label: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub guard: Option<&'static str>,
}

impl EdgeTemplate {
  /// A plain edge with no style, label or guard.
  pub const fn plain(source: &'static str, target: &'static str) -> Self {
    Self {
      source,
      target,
      style: None,
      label: None,
      guard: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelNodeTemplate {
  pub id: &'static str,
  pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelEdgeTemplate {
  pub source: &'static str,
  pub target: &'static str,
}

/// Links a main workflow node to a parallel node (or back).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelConnector {
  pub source: &'static str,
  pub target: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub style: Option<ConnectorStyle>,
}

/// An auxiliary sub-graph shown alongside the main workflow.
///
/// Start connectors run from main workflow node ids to parallel node ids; end
/// connectors run from parallel node ids back to main workflow node ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelWorkflowTemplate {
  pub id: &'static str,
  pub label: &'static str,
  pub nodes: &'static [ParallelNodeTemplate],
  pub edges: &'static [ParallelEdgeTemplate],
  pub start_connectors: &'static [ParallelConnector],
  pub end_connectors: &'static [ParallelConnector],
}

/// Everything declared for one transaction type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowTemplate {
  pub nodes: &'static [StateNodeTemplate],
  pub edges: &'static [EdgeTemplate],
  pub parallel: &'static [ParallelWorkflowTemplate],
}

impl FlowTemplate {
  pub fn node(&self, id: &str) -> Option<&StateNodeTemplate> {
    self.nodes.iter().find(|n| n.id == id)
  }
}
