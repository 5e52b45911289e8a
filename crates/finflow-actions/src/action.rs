use std::fmt;

use finflow_config::{FundsPolicy, Role};
use serde::Serialize;

use crate::context::ActionContext;

/// States after which a requester can no longer change the entity.
const CLOSED_STATES: [&str; 4] = ["Paid", "Reconciled", "Archived", "Completed"];

const PRE_ACCOUNTING: &str = "Pre-Accounting";
const PAYMENT_SCHEDULED: &str = "Payment Scheduled";
const PAYMENT_SIGN_OFF: &str = "Payment Sign-off";
const COMPLIANCE_REVIEW: &str = "Compliance Review";

/// An entry of the action catalog. Declaration order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
  Submit,
  AttachReceipt,
  EditDetails,
  Withdraw,
  #[serde(rename = "reviewAIExtract")]
  ReviewAiExtract,
  OverrideFields,
  MarkAsPreAccounted,
  SchedulePayment,
  Approve,
  Reject,
  RequestChanges,
  ApproveCompliance,
  RejectCompliance,
  SignPayment,
  ExecutePayment,
  ForceAdvance,
  ToggleBypass,
}

impl Action {
  pub const ALL: [Action; 17] = [
    Action::Submit,
    Action::AttachReceipt,
    Action::EditDetails,
    Action::Withdraw,
    Action::ReviewAiExtract,
    Action::OverrideFields,
    Action::MarkAsPreAccounted,
    Action::SchedulePayment,
    Action::Approve,
    Action::Reject,
    Action::RequestChanges,
    Action::ApproveCompliance,
    Action::RejectCompliance,
    Action::SignPayment,
    Action::ExecutePayment,
    Action::ForceAdvance,
    Action::ToggleBypass,
  ];

  pub fn key(&self) -> &'static str {
    match self {
      Action::Submit => "submit",
      Action::AttachReceipt => "attachReceipt",
      Action::EditDetails => "editDetails",
      Action::Withdraw => "withdraw",
      Action::ReviewAiExtract => "reviewAIExtract",
      Action::OverrideFields => "overrideFields",
      Action::MarkAsPreAccounted => "markAsPreAccounted",
      Action::SchedulePayment => "schedulePayment",
      Action::Approve => "approve",
      Action::Reject => "reject",
      Action::RequestChanges => "requestChanges",
      Action::ApproveCompliance => "approveCompliance",
      Action::RejectCompliance => "rejectCompliance",
      Action::SignPayment => "signPayment",
      Action::ExecutePayment => "executePayment",
      Action::ForceAdvance => "forceAdvance",
      Action::ToggleBypass => "toggleBypass",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Action::Submit => "Submit",
      Action::AttachReceipt => "Attach Receipt",
      Action::EditDetails => "Edit Details",
      Action::Withdraw => "Withdraw",
      Action::ReviewAiExtract => "Review AI Extract",
      Action::OverrideFields => "Override Fields",
      Action::MarkAsPreAccounted => "Mark Pre-Accounted",
      Action::SchedulePayment => "Schedule Payment",
      Action::Approve => "Approve",
      Action::Reject => "Reject",
      Action::RequestChanges => "Request Changes",
      Action::ApproveCompliance => "Approve Compliance",
      Action::RejectCompliance => "Reject Compliance",
      Action::SignPayment => "Sign Payment",
      Action::ExecutePayment => "Execute Payment",
      Action::ForceAdvance => "Force Advance",
      Action::ToggleBypass => "Toggle Bypass",
    }
  }

  /// Whether the action is offered at all in `ctx`.
  pub fn visible(&self, ctx: &ActionContext<'_>) -> bool {
    let config = ctx.config;
    match self {
      Action::Submit => {
        ctx.role == Role::Requester && ctx.state_in(&["Draft", "Imported/Initiated"])
      }
      Action::AttachReceipt => ctx.role == Role::Requester,
      Action::EditDetails | Action::Withdraw => {
        ctx.role == Role::Requester && !ctx.state_in(&CLOSED_STATES)
      }
      Action::ReviewAiExtract => {
        ctx.role == Role::Accountant
          && ctx.state == PRE_ACCOUNTING
          && config.pre_accounting.ai_receipt_scan
      }
      Action::OverrideFields | Action::MarkAsPreAccounted => {
        ctx.role == Role::Accountant && ctx.state == PRE_ACCOUNTING
      }
      Action::SchedulePayment => ctx.role == Role::Accountant && ctx.state == PAYMENT_SCHEDULED,
      Action::Approve | Action::Reject | Action::RequestChanges => ctx.is_matching_approver(),
      Action::ApproveCompliance | Action::RejectCompliance => {
        ctx.role == Role::Compliance
          && ctx.state == COMPLIANCE_REVIEW
          && config.compliance.hold_enabled
      }
      Action::SignPayment => {
        ctx.role == Role::Payer && ctx.state == PAYMENT_SIGN_OFF && config.payment.require_sign_off
      }
      Action::ExecutePayment => {
        ctx.role == Role::Payer && ctx.state_in(&[PAYMENT_SCHEDULED, PAYMENT_SIGN_OFF])
      }
      Action::ForceAdvance | Action::ToggleBypass => ctx.role == Role::Admin,
    }
  }

  /// Whether a visible action can be taken right now.
  ///
  /// Funds are not checked against anything yet, so scheduling stays enabled
  /// under a strict policy; the tooltip flags it instead.
  pub fn enabled(&self, _ctx: &ActionContext<'_>) -> bool {
    true
  }

  pub fn tooltip(&self, ctx: &ActionContext<'_>) -> Option<&'static str> {
    match self {
      Action::SchedulePayment if ctx.config.funds_policy == FundsPolicy::Strict => {
        Some("Requires funds verification")
      }
      _ => None,
    }
  }
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use finflow_config::{AppConfig, Lifecycle};

  fn ctx<'a>(state: &'a str, role: Role, config: &'a AppConfig) -> ActionContext<'a> {
    ActionContext::new(state, role, config, Lifecycle::Transactions)
  }

  #[test]
  fn test_keys_are_unique() {
    let mut keys: Vec<_> = Action::ALL.iter().map(|a| a.key()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), Action::ALL.len());
  }

  #[test]
  fn test_serializes_as_key() {
    for action in Action::ALL {
      assert_eq!(
        serde_json::to_value(action).unwrap(),
        serde_json::Value::String(action.key().to_string())
      );
    }
  }

  #[test]
  fn test_requester_loses_edit_on_closed_states() {
    let config = AppConfig::default();
    assert!(Action::EditDetails.visible(&ctx("Draft", Role::Requester, &config)));
    for state in CLOSED_STATES {
      assert!(!Action::EditDetails.visible(&ctx(state, Role::Requester, &config)));
      assert!(!Action::Withdraw.visible(&ctx(state, Role::Requester, &config)));
      assert!(Action::AttachReceipt.visible(&ctx(state, Role::Requester, &config)));
    }
  }

  #[test]
  fn test_review_ai_extract_follows_receipt_scan() {
    let mut config = AppConfig::default();
    assert!(Action::ReviewAiExtract.visible(&ctx(PRE_ACCOUNTING, Role::Accountant, &config)));

    config.pre_accounting.ai_receipt_scan = false;
    assert!(!Action::ReviewAiExtract.visible(&ctx(PRE_ACCOUNTING, Role::Accountant, &config)));
    assert!(Action::OverrideFields.visible(&ctx(PRE_ACCOUNTING, Role::Accountant, &config)));
  }

  #[test]
  fn test_schedule_payment_tooltip_by_funds_policy() {
    let mut config = AppConfig::default();
    let strict = ctx(PAYMENT_SCHEDULED, Role::Accountant, &config);
    assert!(Action::SchedulePayment.enabled(&strict));
    assert_eq!(
      Action::SchedulePayment.tooltip(&strict),
      Some("Requires funds verification")
    );

    config.funds_policy = FundsPolicy::Lenient;
    let lenient = ctx(PAYMENT_SCHEDULED, Role::Accountant, &config);
    assert!(Action::SchedulePayment.enabled(&lenient));
    assert_eq!(Action::SchedulePayment.tooltip(&lenient), None);
  }

  #[test]
  fn test_compliance_actions_need_hold() {
    let mut config = AppConfig::default();
    assert!(!Action::ApproveCompliance.visible(&ctx(COMPLIANCE_REVIEW, Role::Compliance, &config)));

    config.compliance.hold_enabled = true;
    assert!(Action::ApproveCompliance.visible(&ctx(COMPLIANCE_REVIEW, Role::Compliance, &config)));
    assert!(Action::RejectCompliance.visible(&ctx(COMPLIANCE_REVIEW, Role::Compliance, &config)));
  }

  #[test]
  fn test_sign_payment_needs_sign_off() {
    let mut config = AppConfig::default();
    assert!(Action::SignPayment.visible(&ctx(PAYMENT_SIGN_OFF, Role::Payer, &config)));

    config.payment.require_sign_off = false;
    assert!(!Action::SignPayment.visible(&ctx(PAYMENT_SIGN_OFF, Role::Payer, &config)));
    assert!(Action::ExecutePayment.visible(&ctx(PAYMENT_SIGN_OFF, Role::Payer, &config)));
  }
}
