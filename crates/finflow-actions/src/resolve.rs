use finflow_config::{AppConfig, Lifecycle, Role};
use tracing::debug;

use crate::action::Action;
use crate::context::ActionContext;

/// Actions visible to `role` at `state`, in catalog order.
pub fn resolve(state: &str, role: Role, config: &AppConfig, lifecycle: Lifecycle) -> Vec<Action> {
  let ctx = ActionContext::new(state, role, config, lifecycle);
  let actions: Vec<Action> = Action::ALL
    .into_iter()
    .filter(|action| action.visible(&ctx))
    .collect();

  debug!(state, role = %role, visible = actions.len(), "resolved actions");
  actions
}
