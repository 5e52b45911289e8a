//! Finflow Actions
//!
//! A fixed catalog of the actions a role can take on an entity in a given
//! lifecycle state. Visibility decides whether an action is offered at all;
//! enablement and tooltips are evaluated separately by the consumer.

mod action;
mod context;
mod resolve;
mod view;

pub use action::Action;
pub use context::{ActionContext, approval_level_of};
pub use resolve::resolve;
pub use view::{ActionView, StateActions, action_row, unavailable_tooltip};
