//! Finflow Graph
//!
//! This crate provides the derived representation of a lifecycle: the nodes
//! and edges that survive configuration filtering, ready to be handed to a
//! renderer.
//!
//! Key differences from `finflow-templates`:
//! - Nodes are keyed by their final (possibly relabeled) label
//! - Every edge references nodes present in the graph
//! - Consecutive nodes are always connected
//! - Column membership is resolved per label

mod edge;
mod graph;
mod layout;
mod node;
mod parallel;

pub use edge::FlowEdge;
pub use graph::DerivedGraph;
pub use layout::{ColumnEntry, ColumnLayout};
pub use node::{Position, StateNode};
pub use parallel::{EndConnector, ParallelEdge, ParallelNode, ParallelWorkflow, StartConnector};

pub use finflow_templates::{Column, ConnectorStyle, EdgeStyle};
