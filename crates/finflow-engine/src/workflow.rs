use std::collections::{BTreeMap, HashMap, HashSet};

use finflow_config::AppConfig;
use finflow_graph::{DerivedGraph, FlowEdge, StateNode};
use finflow_templates::{StaticTemplates, TemplateSource};
use tracing::debug;

use crate::NODE_SPACING;
use crate::filter::surviving_nodes;

/// Produces a derived graph from configuration.
pub trait StateGenerator {
  fn generate(&self, config: &AppConfig) -> DerivedGraph;
}

/// Derives the workflow lifecycle from a template source.
///
/// This process:
/// 1. Selects the templates for the configured transaction type
/// 2. Drops node templates whose feature is switched off
/// 3. Relabels the first step when pre-accounting is folded into it
/// 4. Translates template edges to final labels, first occurrence wins
/// 5. Bridges every consecutive pair left unconnected
#[derive(Debug, Clone, Default)]
pub struct WorkflowStateGenerator<S: TemplateSource = StaticTemplates> {
  source: S,
}

impl WorkflowStateGenerator<StaticTemplates> {
  pub fn new() -> Self {
    Self::with_source(StaticTemplates)
  }
}

impl<S: TemplateSource> WorkflowStateGenerator<S> {
  pub fn with_source(source: S) -> Self {
    Self { source }
  }
}

impl<S: TemplateSource> StateGenerator for WorkflowStateGenerator<S> {
  fn generate(&self, config: &AppConfig) -> DerivedGraph {
    let flow = self.source.flow(config.transaction_type);
    let surviving = surviving_nodes(flow, config);

    if surviving.is_empty() {
      debug!(
        transaction_type = %config.transaction_type,
        "workflow lifecycle disabled"
      );
      return DerivedGraph::default();
    }

    let nodes: Vec<StateNode> = surviving
      .iter()
      .enumerate()
      .map(|(i, s)| {
        StateNode::new(&s.label, i as f64 * NODE_SPACING)
          .with_badges(s.template.badges.iter().copied())
      })
      .collect();

    let label_by_id: HashMap<&str, &str> = surviving
      .iter()
      .map(|s| (s.template.id, s.label.as_str()))
      .collect();

    let mut seen = HashSet::new();
    let mut edges = Vec::new();

    for template in flow.edges {
      // An endpoint that was filtered out (or never declared) drops the edge.
      let (Some(source), Some(target)) = (
        label_by_id.get(template.source),
        label_by_id.get(template.target),
      ) else {
        continue;
      };

      let edge = FlowEdge::new(*source, *target)
        .with_style(template.style.unwrap_or_default())
        .with_label(template.label.unwrap_or_default())
        .with_guard(template.guard.unwrap_or_default());
      if seen.insert(edge.key()) {
        edges.push(edge);
      }
    }

    let template_edges = edges.len();
    for pair in surviving.windows(2) {
      let edge = FlowEdge::new(&pair[0].label, &pair[1].label);
      if seen.insert(edge.key()) {
        edges.push(edge);
      }
    }

    let columns_by_label: BTreeMap<String, Vec<_>> = surviving
      .iter()
      .map(|s| (s.label.clone(), s.template.columns.to_vec()))
      .collect();

    debug!(
      transaction_type = %config.transaction_type,
      nodes = nodes.len(),
      edges = edges.len(),
      bridges = edges.len() - template_edges,
      "derived workflow states"
    );

    DerivedGraph {
      nodes,
      edges,
      columns_by_label,
    }
  }
}

/// Derive the workflow lifecycle from the built-in templates.
pub fn generate_workflow_states(config: &AppConfig) -> DerivedGraph {
  WorkflowStateGenerator::new().generate(config)
}

#[cfg(test)]
mod tests {
  use super::*;
  use finflow_config::TransactionType;
  use finflow_graph::{Column, EdgeStyle};
  use finflow_templates::{Category, EdgeTemplate, FlowTemplate, StateNodeTemplate};

  const PENDING: &[Column] = &[Column::Pending];

  /// Fixture templates exercising edge cases the built-in catalog does not.
  struct MockTemplates {
    flow: FlowTemplate,
  }

  impl TemplateSource for MockTemplates {
    fn flow(&self, _transaction_type: TransactionType) -> &FlowTemplate {
      &self.flow
    }
  }

  static NODES: [StateNodeTemplate; 5] = [
    StateNodeTemplate {
      id: "start",
      label: "Start",
      badges: &[],
      category: Category::Core,
      columns: PENDING,
    },
    StateNodeTemplate {
      id: "pre-accounting",
      label: "Pre-accounting",
      badges: &[],
      category: Category::PreAccounting,
      columns: PENDING,
    },
    StateNodeTemplate {
      id: "review",
      label: "Review",
      badges: &["AI"],
      category: Category::Approvals,
      columns: PENDING,
    },
    StateNodeTemplate {
      id: "sign",
      label: "Sign",
      badges: &[],
      category: Category::SignOff,
      columns: PENDING,
    },
    StateNodeTemplate {
      id: "done",
      label: "Done",
      badges: &[],
      category: Category::Complete,
      columns: &[Column::Pending, Column::Rejected],
    },
  ];

  static EDGES: [EdgeTemplate; 5] = [
    EdgeTemplate {
      source: "start",
      target: "review",
      style: Some(EdgeStyle::Dashed),
      label: Some("fast"),
      guard: Some("amount < 100"),
    },
    // Duplicate key: dropped in favour of the first declaration.
    EdgeTemplate {
      source: "start",
      target: "review",
      style: Some(EdgeStyle::Red),
      label: Some("late"),
      guard: None,
    },
    EdgeTemplate::plain("review", "sign"),
    EdgeTemplate::plain("sign", "nowhere"),
    EdgeTemplate {
      source: "start",
      target: "done",
      style: Some(EdgeStyle::Red),
      label: Some("Cancelled"),
      guard: None,
    },
  ];

  fn mock_generator() -> WorkflowStateGenerator<MockTemplates> {
    WorkflowStateGenerator::with_source(MockTemplates {
      flow: FlowTemplate {
        nodes: &NODES,
        edges: &EDGES,
        parallel: &[],
      },
    })
  }

  fn payment_config() -> AppConfig {
    let mut config = AppConfig::default().with_transaction_type(TransactionType::Payment);
    config.pre_accounting.required = false;
    config
  }

  #[test]
  fn test_duplicate_edges_first_write_wins() {
    let graph = mock_generator().generate(&payment_config());

    let fast: Vec<_> = graph
      .edges
      .iter()
      .filter(|e| e.source == "Start" && e.target == "Review")
      .collect();
    assert_eq!(fast.len(), 1);
    assert_eq!(fast[0].style, EdgeStyle::Dashed);
    assert_eq!(fast[0].label, "fast");
    assert_eq!(fast[0].guard, "amount < 100");
  }

  #[test]
  fn test_dangling_edges_are_omitted() {
    let graph = mock_generator().generate(&payment_config());

    assert!(graph.edges.iter().all(|e| e.target != "nowhere"));
    for edge in &graph.edges {
      assert!(graph.node(&edge.source).is_some());
      assert!(graph.node(&edge.target).is_some());
    }
  }

  #[test]
  fn test_bridge_edges_fill_filtered_gaps() {
    let mut config = payment_config();
    config.approvals.enabled = false;

    let graph = mock_generator().generate(&config);

    assert_eq!(graph.labels(), vec!["Start", "Sign", "Done"]);
    // review was filtered, so start -> sign is synthesized.
    let bridge = graph
      .edges
      .iter()
      .find(|e| e.source == "Start" && e.target == "Sign")
      .unwrap();
    assert_eq!(bridge.style, EdgeStyle::Solid);
    assert!(bridge.label.is_empty());
    assert!(bridge.guard.is_empty());
    assert!(graph.has_edge("Sign", "Done"));
  }

  #[test]
  fn test_bridge_skipped_when_template_edge_exists() {
    let mut config = payment_config();
    config.approvals.enabled = false;
    config.payment.require_sign_off = false;
    config.compliance.hold_enabled = true;

    let graph = mock_generator().generate(&config);

    assert_eq!(graph.labels(), vec!["Start", "Done"]);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].label, "Cancelled");
    assert_eq!(graph.edges[0].style, EdgeStyle::Red);
  }

  #[test]
  fn test_badges_and_columns_copied_from_templates() {
    let graph = mock_generator().generate(&payment_config());

    assert_eq!(graph.node("Review").unwrap().badges, vec!["AI".to_string()]);
    assert_eq!(graph.columns_for("Done"), &[Column::Pending, Column::Rejected]);
    assert_eq!(graph.columns_by_label.len(), graph.nodes.len());
  }

  #[test]
  fn test_positions_follow_sequence() {
    let graph = mock_generator().generate(&payment_config());

    let xs: Vec<f64> = graph.nodes.iter().map(|n| n.position.x).collect();
    assert_eq!(xs, vec![0.0, 200.0, 400.0, 600.0]);
    assert!(graph.nodes.iter().all(|n| n.id == n.label));
  }

  #[test]
  fn test_relabel_applies_before_edge_translation() {
    let config = AppConfig::default().with_transaction_type(TransactionType::Payment);

    let graph = mock_generator().generate(&config);

    assert_eq!(graph.nodes[0].label, "Start + pre-accounting step");
    assert!(graph.has_edge("Start + pre-accounting step", "Review"));
    assert!(graph.columns_by_label.contains_key("Start + pre-accounting step"));
  }

  #[test]
  fn test_built_in_card_flow() {
    let mut config = AppConfig::default().with_transaction_type(TransactionType::Card);
    config.expense_management.enabled = false;

    let graph = generate_workflow_states(&config);

    assert_eq!(
      graph.labels(),
      vec!["Awaiting approval(s)", "Approved", "Workflow Complete"]
    );
    assert_eq!(graph.edges.len(), 2);
    assert_eq!(
      graph.columns_for("Approved"),
      &[Column::Pending, Column::Executed]
    );
  }

  fn pre_accounting_shown(config: &AppConfig) -> bool {
    mock_generator()
      .generate(config)
      .node("Pre-accounting")
      .is_some()
  }

  #[test]
  fn test_sequential_pre_accounting_step_for_payment() {
    let config = AppConfig::default().with_transaction_type(TransactionType::Payment);
    let graph = mock_generator().generate(&config);

    assert_eq!(
      graph.labels(),
      vec![
        "Start + pre-accounting step",
        "Pre-accounting",
        "Review",
        "Sign",
        "Done"
      ]
    );
    assert!(graph.has_edge("Start + pre-accounting step", "Pre-accounting"));
    assert!(graph.has_edge("Pre-accounting", "Review"));
  }

  #[test]
  fn test_payment_pre_accounting_step_dropped() {
    let mut folded = AppConfig::default().with_transaction_type(TransactionType::Payment);
    folded.pre_accounting.included_in_first_step = true;
    assert!(!pre_accounting_shown(&folded));

    let mut parallel = AppConfig::default().with_transaction_type(TransactionType::Payment);
    parallel.pre_accounting.not_sequential = true;
    assert!(!pre_accounting_shown(&parallel));
    assert_eq!(mock_generator().generate(&parallel).nodes[0].label, "Start");

    let mut not_required = AppConfig::default().with_transaction_type(TransactionType::Payment);
    not_required.pre_accounting.required = false;
    assert!(!pre_accounting_shown(&not_required));
  }

  #[test]
  fn test_currency_pre_accounting_ignores_first_step_flag() {
    let mut config = AppConfig::default().with_transaction_type(TransactionType::Currency);
    config.pre_accounting.included_in_first_step = true;
    assert!(pre_accounting_shown(&config));

    config.pre_accounting.not_sequential = true;
    assert!(!pre_accounting_shown(&config));

    config.pre_accounting.not_sequential = false;
    config.pre_accounting.required = false;
    assert!(!pre_accounting_shown(&config));
  }

  #[test]
  fn test_card_keeps_pre_accounting_nodes() {
    let mut config = AppConfig::default().with_transaction_type(TransactionType::Card);
    config.pre_accounting.not_sequential = true;

    let graph = mock_generator().generate(&config);
    assert!(graph.node("Pre-accounting").is_some());
    assert_eq!(graph.nodes[0].label, "Start");
  }
}
