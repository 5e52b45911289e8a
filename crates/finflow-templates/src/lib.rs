//! Finflow Templates
//!
//! Static, per-transaction-type catalog of every state a lifecycle *could*
//! contain, the transitions between them, and the auxiliary parallel
//! sub-workflows. Nothing here depends on configuration; the engine decides
//! which parts apply.
//!
//! Labels and badges are data, not logic: renaming a state only touches
//! [`catalog`].

pub mod catalog;
mod source;
mod types;

pub use source::{StaticTemplates, TemplateSource};
pub use types::{
  Category, Column, ConnectorStyle, EdgeStyle, EdgeTemplate, FlowTemplate, ParallelConnector,
  ParallelEdgeTemplate, ParallelNodeTemplate, ParallelWorkflowTemplate, StateNodeTemplate,
};
