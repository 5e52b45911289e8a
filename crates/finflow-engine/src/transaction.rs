use finflow_config::{AppConfig, TransactionType};
use finflow_graph::{DerivedGraph, EdgeStyle, FlowEdge, StateNode};
use serde::Serialize;

use crate::NODE_SPACING;
use crate::workflow::StateGenerator;

pub const PENDING: &str = "Pending";
pub const EXECUTED: &str = "Executed";
pub const REJECTED: &str = "Rejected";

const BASE_STATES: [&str; 3] = [PENDING, EXECUTED, REJECTED];

/// An extra transaction lifecycle column shown next to the base states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupplementaryColumn {
  pub id: &'static str,
  pub label: &'static str,
}

const CARD_COLUMNS: &[SupplementaryColumn] = &[
  SupplementaryColumn {
    id: "transaction-verification",
    label: "Verification",
  },
  SupplementaryColumn {
    id: "transaction-reverted",
    label: "Reverted/Refunded",
  },
  SupplementaryColumn {
    id: "transaction-error",
    label: "Error",
  },
];

/// The transaction lifecycle: pending, then executed or rejected.
///
/// The shape is the same for every configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionStateGenerator;

impl StateGenerator for TransactionStateGenerator {
  fn generate(&self, _config: &AppConfig) -> DerivedGraph {
    let nodes = BASE_STATES
      .iter()
      .enumerate()
      .map(|(i, state)| StateNode::new(*state, i as f64 * NODE_SPACING))
      .collect();

    let edges = vec![
      FlowEdge::new(PENDING, EXECUTED),
      FlowEdge::new(PENDING, REJECTED)
        .with_style(EdgeStyle::Red)
        .with_label("Failed"),
    ];

    DerivedGraph {
      nodes,
      edges,
      ..Default::default()
    }
  }
}

pub fn generate_transaction_states(config: &AppConfig) -> DerivedGraph {
  TransactionStateGenerator.generate(config)
}

/// Extra transaction columns for `transaction_type`; only cards have any.
pub fn supplementary_columns(transaction_type: TransactionType) -> &'static [SupplementaryColumn] {
  match transaction_type {
    TransactionType::Card => CARD_COLUMNS,
    TransactionType::Payment | TransactionType::Currency => &[],
  }
}
