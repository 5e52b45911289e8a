//! Finflow Engine
//!
//! Derives lifecycle graphs from an [`AppConfig`](finflow_config::AppConfig)
//! and a template source. Derivation is total: any configuration yields a
//! graph, and template references that do not resolve are dropped rather
//! than reported.
//!
//! - [`WorkflowStateGenerator`] filters, relabels and sequences the workflow
//! - [`TransactionStateGenerator`] emits the fixed transaction lifecycle
//! - [`ParallelWorkflowSelector`] picks the branches shown alongside
//! - [`LifecycleModel`] bundles all of the above for a renderer

mod filter;
mod model;
mod parallel;
mod transaction;
mod workflow;

/// Horizontal distance between consecutive derived nodes.
pub const NODE_SPACING: f64 = 200.0;

pub use filter::{PRE_ACCOUNTING_SUFFIX, final_label, includes, workflow_enabled};
pub use model::LifecycleModel;
pub use parallel::{BranchKind, ParallelWorkflowSelector, anchor_offset, select_parallel_workflows};
pub use transaction::{
  EXECUTED, PENDING, REJECTED, SupplementaryColumn, TransactionStateGenerator,
  generate_transaction_states, supplementary_columns,
};
pub use workflow::{StateGenerator, WorkflowStateGenerator, generate_workflow_states};
