use std::collections::HashMap;

use finflow_config::{AppConfig, TransactionType};
use finflow_graph::{
  ColumnLayout, EndConnector, ParallelEdge, ParallelNode, ParallelWorkflow, StartConnector,
};
use finflow_templates::catalog::WORKFLOW_COMPLETE;
use finflow_templates::{ParallelWorkflowTemplate, StaticTemplates, TemplateSource};
use tracing::debug;

use crate::filter::surviving_nodes;

/// Slots between the parallel anchor and the completion node.
const ANCHOR_LOOKBACK: usize = 2;

/// The two kinds of branch that can run alongside the main workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
  PreAccounting,
  Compliance,
}

impl BranchKind {
  /// Classify a parallel template by its id.
  pub fn of(template_id: &str) -> Option<Self> {
    if template_id.contains("preaccounting") {
      Some(BranchKind::PreAccounting)
    } else if template_id.contains("compliance") {
      Some(BranchKind::Compliance)
    } else {
      None
    }
  }

  /// Whether a branch of this kind is shown for `config`.
  pub fn is_active(&self, config: &AppConfig) -> bool {
    match self {
      BranchKind::PreAccounting => {
        config.pre_accounting.required
          && config.pre_accounting.not_sequential
          && matches!(
            config.transaction_type,
            TransactionType::Payment | TransactionType::Currency
          )
      }
      BranchKind::Compliance => {
        config.compliance.hold_enabled
          && config.compliance.not_sequential
          && config.transaction_type == TransactionType::Payment
      }
    }
  }
}

/// Picks the parallel workflows that apply to a configuration.
#[derive(Debug, Clone, Default)]
pub struct ParallelWorkflowSelector<S: TemplateSource = StaticTemplates> {
  source: S,
}

impl ParallelWorkflowSelector<StaticTemplates> {
  pub fn new() -> Self {
    Self::with_source(StaticTemplates)
  }
}

impl<S: TemplateSource> ParallelWorkflowSelector<S> {
  pub fn with_source(source: S) -> Self {
    Self { source }
  }

  /// Active parallel workflows, in declaration order.
  ///
  /// Connectors are translated to the main workflow's final labels; a
  /// connector whose main node is not shown is dropped.
  pub fn select_active(&self, config: &AppConfig) -> Vec<ParallelWorkflow> {
    let flow = self.source.flow(config.transaction_type);

    let selected: Vec<&ParallelWorkflowTemplate> = flow
      .parallel
      .iter()
      .filter(|wf| BranchKind::of(wf.id).is_some_and(|kind| kind.is_active(config)))
      .collect();

    if selected.is_empty() {
      return Vec::new();
    }

    let surviving = surviving_nodes(flow, config);
    let main_labels: HashMap<&str, &str> = surviving
      .iter()
      .map(|s| (s.template.id, s.label.as_str()))
      .collect();

    let workflows: Vec<ParallelWorkflow> = selected
      .into_iter()
      .map(|wf| build_workflow(wf, &main_labels))
      .collect();

    debug!(
      transaction_type = %config.transaction_type,
      active = workflows.len(),
      "selected parallel workflows"
    );

    workflows
  }
}

fn build_workflow(wf: &ParallelWorkflowTemplate, main_labels: &HashMap<&str, &str>) -> ParallelWorkflow {
  let has_node = |id: &str| wf.nodes.iter().any(|n| n.id == id);

  let start_connectors = wf
    .start_connectors
    .iter()
    .filter(|c| has_node(c.target))
    .filter_map(|c| {
      main_labels.get(c.source).map(|label| StartConnector {
        from_label: label.to_string(),
        to_node: c.target.to_string(),
        style: c.style.unwrap_or_default(),
      })
    })
    .collect();

  let end_connectors = wf
    .end_connectors
    .iter()
    .filter(|c| has_node(c.source))
    .filter_map(|c| {
      main_labels.get(c.target).map(|label| EndConnector {
        from_node: c.source.to_string(),
        to_label: label.to_string(),
        style: c.style.unwrap_or_default(),
      })
    })
    .collect();

  ParallelWorkflow {
    id: wf.id.to_string(),
    label: wf.label.to_string(),
    nodes: wf
      .nodes
      .iter()
      .map(|n| ParallelNode {
        id: n.id.to_string(),
        label: n.label.to_string(),
      })
      .collect(),
    edges: wf
      .edges
      .iter()
      .filter(|e| has_node(e.source) && has_node(e.target))
      .map(|e| ParallelEdge {
        source: e.source.to_string(),
        target: e.target.to_string(),
      })
      .collect(),
    start_connectors,
    end_connectors,
  }
}

pub fn select_parallel_workflows(config: &AppConfig) -> Vec<ParallelWorkflow> {
  ParallelWorkflowSelector::new().select_active(config)
}

/// Pending-column slot where parallel rows start.
///
/// Two slots before "Workflow Complete" when it is present past the first
/// slot, otherwise two slots before the end of the pending column. A parallel
/// node at index `k` of its branch sits in slot `anchor + k`.
pub fn anchor_offset(layout: &ColumnLayout) -> usize {
  match layout.pending_index(WORKFLOW_COMPLETE) {
    Some(index) if index > 0 => index.saturating_sub(ANCHOR_LOOKBACK),
    _ => layout.pending.len().saturating_sub(ANCHOR_LOOKBACK),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use finflow_graph::{ColumnEntry, ConnectorStyle};

  fn payment() -> AppConfig {
    AppConfig::default().with_transaction_type(TransactionType::Payment)
  }

  fn ids(workflows: &[ParallelWorkflow]) -> Vec<&str> {
    workflows.iter().map(|w| w.id.as_str()).collect()
  }

  #[test]
  fn test_nothing_selected_by_default() {
    assert!(select_parallel_workflows(&payment()).is_empty());
  }

  #[test]
  fn test_pre_accounting_branch_for_payment_and_currency() {
    for ty in [TransactionType::Payment, TransactionType::Currency] {
      let mut config = AppConfig::default().with_transaction_type(ty);
      config.pre_accounting.not_sequential = true;
      assert_eq!(
        ids(&select_parallel_workflows(&config)),
        vec!["parallel-preaccounting"]
      );

      config.pre_accounting.required = false;
      assert!(select_parallel_workflows(&config).is_empty());
    }
  }

  #[test]
  fn test_no_branches_for_cards() {
    let mut config = AppConfig::default().with_transaction_type(TransactionType::Card);
    config.pre_accounting.not_sequential = true;
    config.compliance.hold_enabled = true;
    config.compliance.not_sequential = true;

    assert!(!BranchKind::PreAccounting.is_active(&config));
    assert!(!BranchKind::Compliance.is_active(&config));
    assert!(select_parallel_workflows(&config).is_empty());
  }

  #[test]
  fn test_both_branches_in_declaration_order() {
    let mut config = payment();
    config.pre_accounting.not_sequential = true;
    config.compliance.hold_enabled = true;
    config.compliance.not_sequential = true;

    let workflows = select_parallel_workflows(&config);
    assert_eq!(
      ids(&workflows),
      vec!["parallel-preaccounting", "parallel-compliance"]
    );
  }

  #[test]
  fn test_connectors_use_final_main_labels() {
    let mut config = payment();
    config.compliance.hold_enabled = true;
    config.compliance.not_sequential = true;

    let workflows = select_parallel_workflows(&config);
    let compliance = &workflows[0];

    assert_eq!(compliance.nodes.len(), 2);
    assert_eq!(compliance.edges.len(), 1);
    assert_eq!(
      compliance.start_connectors,
      vec![StartConnector {
        from_label: "Payment created/scheduled + pre-accounting step".to_string(),
        to_node: "parallel-pending-verification".to_string(),
        style: ConnectorStyle::Dotted,
      }]
    );
    assert_eq!(
      compliance.end_connectors,
      vec![EndConnector {
        from_node: "parallel-verification-submitted".to_string(),
        to_label: "Workflow Complete".to_string(),
        style: ConnectorStyle::Dashed,
      }]
    );
    assert_eq!(compliance.node_index("parallel-verification-submitted"), Some(1));
  }

  #[test]
  fn test_currency_start_connector_is_dashed() {
    let mut config = AppConfig::default().with_transaction_type(TransactionType::Currency);
    config.pre_accounting.not_sequential = true;

    let workflows = select_parallel_workflows(&config);
    assert_eq!(workflows[0].start_connectors[0].style, ConnectorStyle::Dashed);
    assert_eq!(
      workflows[0].start_connectors[0].from_label,
      "Exchange created/scheduled"
    );
  }

  #[test]
  fn test_branch_kind_classification() {
    assert_eq!(
      BranchKind::of("parallel-preaccounting"),
      Some(BranchKind::PreAccounting)
    );
    assert_eq!(
      BranchKind::of("parallel-compliance"),
      Some(BranchKind::Compliance)
    );
    assert_eq!(BranchKind::of("parallel-fx"), None);
  }

  fn pending(labels: &[&str]) -> ColumnLayout {
    ColumnLayout {
      pending: labels
        .iter()
        .map(|l| ColumnEntry {
          id: l.to_string(),
          label: l.to_string(),
        })
        .collect(),
      ..Default::default()
    }
  }

  #[test]
  fn test_anchor_counts_back_from_workflow_complete() {
    let layout = pending(&["a", "b", "c", "Workflow Complete"]);
    assert_eq!(anchor_offset(&layout), 1);
  }

  #[test]
  fn test_anchor_falls_back_to_column_end() {
    assert_eq!(anchor_offset(&pending(&["a", "b", "c", "d"])), 2);
    assert_eq!(anchor_offset(&pending(&["Workflow Complete", "x", "y"])), 1);
    assert_eq!(anchor_offset(&pending(&["a"])), 0);
    assert_eq!(anchor_offset(&pending(&[])), 0);
  }

  #[test]
  fn test_anchor_clamps_at_zero() {
    assert_eq!(anchor_offset(&pending(&["a", "Workflow Complete"])), 0);
  }
}
