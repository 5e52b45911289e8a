use finflow_config::{AppConfig, Role};
use serde::Serialize;

use crate::action::Action;
use crate::context::ActionContext;
use crate::resolve::resolve;

/// An action evaluated for one state, as shown on an action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionView {
  pub key: &'static str,
  pub label: &'static str,
  pub enabled: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tooltip: Option<String>,
}

impl ActionView {
  pub fn evaluate(action: Action, ctx: &ActionContext<'_>) -> Self {
    let enabled = action.enabled(ctx);
    let tooltip = match action.tooltip(ctx) {
      Some(text) => Some(text.to_string()),
      None if !enabled => Some(unavailable_tooltip(ctx.role, ctx.state)),
      None => None,
    };

    Self {
      key: action.key(),
      label: action.label(),
      enabled,
      tooltip,
    }
  }
}

/// Tooltip for a disabled action that does not explain itself.
pub fn unavailable_tooltip(role: Role, state: &str) -> String {
  format!("Action not available for {role} at {state}")
}

/// The evaluated actions for one state of an action row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateActions {
  pub state: String,
  pub actions: Vec<ActionView>,
}

/// Evaluate the actions of `role` for each of `states`, in order.
///
/// The lifecycle is taken from the configuration.
pub fn action_row<S: AsRef<str>>(states: &[S], role: Role, config: &AppConfig) -> Vec<StateActions> {
  states
    .iter()
    .map(|state| {
      let state = state.as_ref();
      let ctx = ActionContext::new(state, role, config, config.lifecycle);
      let actions = resolve(state, role, config, config.lifecycle)
        .into_iter()
        .map(|action| ActionView::evaluate(action, &ctx))
        .collect();

      StateActions {
        state: state.to_string(),
        actions,
      }
    })
    .collect()
}
