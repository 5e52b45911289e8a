//! Built-in templates for each transaction type.
//!
//! Labels and badges can be renamed here freely. Ids are what edges and
//! connectors refer to, so keep those stable.

use crate::types::{
  Category, Column, ConnectorStyle, EdgeTemplate, FlowTemplate, ParallelConnector,
  ParallelEdgeTemplate, ParallelNodeTemplate, ParallelWorkflowTemplate, StateNodeTemplate,
};

/// Label of the terminal node every workflow converges on.
pub const WORKFLOW_COMPLETE: &str = "Workflow Complete";

const PENDING: &[Column] = &[Column::Pending];
const PENDING_EXECUTED: &[Column] = &[Column::Pending, Column::Executed];
const ALL_COLUMNS: &[Column] = &[Column::Pending, Column::Executed, Column::Rejected];

const fn node(
  id: &'static str,
  label: &'static str,
  category: Category,
  columns: &'static [Column],
) -> StateNodeTemplate {
  StateNodeTemplate {
    id,
    label,
    badges: &[],
    category,
    columns,
  }
}

const PREACCOUNTING_NODES: &[ParallelNodeTemplate] = &[
  ParallelNodeTemplate {
    id: "parallel-pending-accounting",
    label: "Pending accounting details",
  },
  ParallelNodeTemplate {
    id: "parallel-accounting-complete",
    label: "Accounting details complete",
  },
];

const PREACCOUNTING_EDGES: &[ParallelEdgeTemplate] = &[ParallelEdgeTemplate {
  source: "parallel-pending-accounting",
  target: "parallel-accounting-complete",
}];

const PREACCOUNTING_END: &[ParallelConnector] = &[ParallelConnector {
  source: "parallel-accounting-complete",
  target: "workflow-complete",
  style: Some(ConnectorStyle::Dashed),
}];

pub static PAYMENT: FlowTemplate = FlowTemplate {
  nodes: &[
    node(
      "payment-created",
      "Payment created/scheduled",
      Category::Core,
      PENDING,
    ),
    StateNodeTemplate {
      id: "kyc-pending",
      label: "Pending verification document",
      badges: &["KYC"],
      category: Category::Compliance,
      columns: PENDING,
    },
    node(
      "kyc-submitted",
      "Verification document submitted",
      Category::Compliance,
      PENDING,
    ),
    node(
      "approvals-pending",
      "Awaiting approval(s)",
      Category::Approvals,
      PENDING,
    ),
    node("approved", "Approved", Category::Approvals, PENDING),
    node(
      "awaiting-signatures",
      "Awaiting signatures",
      Category::SignOff,
      PENDING,
    ),
    node(
      "payment-signed",
      "Payment signed off",
      Category::SignOff,
      PENDING,
    ),
    node(
      "workflow-complete",
      WORKFLOW_COMPLETE,
      Category::Complete,
      ALL_COLUMNS,
    ),
  ],
  // "pre-accounting" is never declared as a node for payments; the step is
  // folded into the first node or shown as a parallel branch.
  edges: &[
    EdgeTemplate::plain("payment-created", "pre-accounting"),
    EdgeTemplate::plain("kyc-pending", "kyc-submitted"),
    EdgeTemplate::plain("kyc-submitted", "approvals-pending"),
    EdgeTemplate::plain("approvals-pending", "approved"),
    EdgeTemplate::plain("approved", "awaiting-signatures"),
    EdgeTemplate::plain("awaiting-signatures", "payment-signed"),
    EdgeTemplate::plain("payment-signed", "workflow-complete"),
  ],
  parallel: &[
    ParallelWorkflowTemplate {
      id: "parallel-preaccounting",
      label: "Parallel workflow #1",
      nodes: PREACCOUNTING_NODES,
      edges: PREACCOUNTING_EDGES,
      start_connectors: &[ParallelConnector {
        source: "payment-created",
        target: "parallel-pending-accounting",
        style: Some(ConnectorStyle::Dotted),
      }],
      end_connectors: PREACCOUNTING_END,
    },
    ParallelWorkflowTemplate {
      id: "parallel-compliance",
      label: "Parallel workflow #2",
      nodes: &[
        ParallelNodeTemplate {
          id: "parallel-pending-verification",
          label: "Pending verification document",
        },
        ParallelNodeTemplate {
          id: "parallel-verification-submitted",
          label: "Verification document submitted",
        },
      ],
      edges: &[ParallelEdgeTemplate {
        source: "parallel-pending-verification",
        target: "parallel-verification-submitted",
      }],
      start_connectors: &[ParallelConnector {
        source: "payment-created",
        target: "parallel-pending-verification",
        style: Some(ConnectorStyle::Dotted),
      }],
      end_connectors: &[ParallelConnector {
        source: "parallel-verification-submitted",
        target: "workflow-complete",
        style: Some(ConnectorStyle::Dashed),
      }],
    },
  ],
};

pub static CURRENCY: FlowTemplate = FlowTemplate {
  nodes: &[
    node(
      "payment-created",
      "Exchange created/scheduled",
      Category::Core,
      PENDING,
    ),
    node(
      "approvals-pending",
      "Awaiting approval(s)",
      Category::Approvals,
      PENDING,
    ),
    node("approved", "Approved", Category::Approvals, PENDING),
    node(
      "workflow-complete",
      WORKFLOW_COMPLETE,
      Category::Complete,
      ALL_COLUMNS,
    ),
  ],
  edges: &[
    EdgeTemplate::plain("currency-pre-accounting", "approvals-pending"),
    EdgeTemplate::plain("approvals-pending", "approved"),
    EdgeTemplate::plain("approved", "workflow-complete"),
  ],
  parallel: &[ParallelWorkflowTemplate {
    id: "parallel-preaccounting",
    label: "Parallel workflow #1",
    nodes: PREACCOUNTING_NODES,
    edges: PREACCOUNTING_EDGES,
    start_connectors: &[ParallelConnector {
      source: "payment-created",
      target: "parallel-pending-accounting",
      style: Some(ConnectorStyle::Dashed),
    }],
    end_connectors: PREACCOUNTING_END,
  }],
};

pub static CARD: FlowTemplate = FlowTemplate {
  nodes: &[
    node(
      "expense-incomplete",
      "Expense Incomplete",
      Category::ExpenseManagement,
      PENDING_EXECUTED,
    ),
    node(
      "expense-complete",
      "Expense Complete",
      Category::ExpenseManagement,
      PENDING_EXECUTED,
    ),
    node(
      "approvals-pending",
      "Awaiting approval(s)",
      Category::Approvals,
      PENDING_EXECUTED,
    ),
    node("approved", "Approved", Category::Approvals, PENDING_EXECUTED),
    node(
      "workflow-complete",
      WORKFLOW_COMPLETE,
      Category::Complete,
      ALL_COLUMNS,
    ),
  ],
  edges: &[
    EdgeTemplate::plain("expense-incomplete", "expense-complete"),
    EdgeTemplate::plain("expense-complete", "approvals-pending"),
    EdgeTemplate::plain("approvals-pending", "approved"),
    EdgeTemplate::plain("approved", "workflow-complete"),
  ],
  parallel: &[],
};
