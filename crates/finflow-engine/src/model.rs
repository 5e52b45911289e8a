use finflow_config::{AppConfig, TransactionType};
use finflow_graph::{ColumnLayout, DerivedGraph, ParallelWorkflow};
use finflow_templates::{StaticTemplates, TemplateSource};
use serde::Serialize;
use tracing::info;

use crate::parallel::{ParallelWorkflowSelector, anchor_offset};
use crate::transaction::{SupplementaryColumn, TransactionStateGenerator, supplementary_columns};
use crate::workflow::{StateGenerator, WorkflowStateGenerator};

/// Everything a renderer needs for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleModel {
  pub transaction_type: TransactionType,
  pub workflow: DerivedGraph,
  pub columns: ColumnLayout,
  pub transaction: DerivedGraph,
  pub supplementary_columns: Vec<SupplementaryColumn>,
  pub parallel: Vec<ParallelWorkflow>,
  /// Pending-column slot the parallel rows start at.
  pub parallel_anchor: usize,
}

impl LifecycleModel {
  /// Derive the model from the built-in templates.
  pub fn derive(config: &AppConfig) -> Self {
    Self::derive_with(&StaticTemplates, config)
  }

  pub fn derive_with<S: TemplateSource>(source: &S, config: &AppConfig) -> Self {
    let workflow = WorkflowStateGenerator::with_source(source).generate(config);
    let columns = ColumnLayout::from_graph(&workflow);
    let parallel = ParallelWorkflowSelector::with_source(source).select_active(config);
    let parallel_anchor = anchor_offset(&columns);

    info!(
      transaction_type = %config.transaction_type,
      nodes = workflow.nodes.len(),
      edges = workflow.edges.len(),
      parallel = parallel.len(),
      "derived lifecycle model"
    );

    Self {
      transaction_type: config.transaction_type,
      workflow,
      columns,
      transaction: TransactionStateGenerator.generate(config),
      supplementary_columns: supplementary_columns(config.transaction_type).to_vec(),
      parallel,
      parallel_anchor,
    }
  }
}
