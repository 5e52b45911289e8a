use finflow_config::{AppConfig, ApprovalLevel, Lifecycle, Role};

/// States an approver acts on, with the tier each belongs to.
const APPROVAL_STATES: [(&str, ApprovalLevel); 6] = [
  ("Awaiting Approval L1", ApprovalLevel::L1),
  ("Awaiting Approval L2", ApprovalLevel::L2),
  ("Awaiting Approval L3", ApprovalLevel::L3),
  ("Approval L1", ApprovalLevel::L1),
  ("Approval L2", ApprovalLevel::L2),
  ("Approval L3", ApprovalLevel::L3),
];

/// The approval tier of `state`, if it is an approval state.
pub fn approval_level_of(state: &str) -> Option<ApprovalLevel> {
  APPROVAL_STATES
    .iter()
    .find(|(name, _)| *name == state)
    .map(|(_, level)| *level)
}

/// Everything an action predicate may look at. Built per query.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
  pub config: &'a AppConfig,
  pub lifecycle: Lifecycle,
  pub state: &'a str,
  pub role: Role,
}

impl<'a> ActionContext<'a> {
  pub fn new(state: &'a str, role: Role, config: &'a AppConfig, lifecycle: Lifecycle) -> Self {
    Self {
      config,
      lifecycle,
      state,
      role,
    }
  }

  pub(crate) fn state_in(&self, states: &[&str]) -> bool {
    states.contains(&self.state)
  }

  /// Whether the role is the approver for the current approval state.
  pub(crate) fn is_matching_approver(&self) -> bool {
    match (approval_level_of(self.state), self.role.approval_level()) {
      (Some(state_level), Some(role_level)) => state_level == role_level,
      _ => false,
    }
  }
}
