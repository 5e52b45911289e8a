//! Inclusion and relabeling rules shared by the workflow generator and the
//! parallel selector.

use finflow_config::{AppConfig, TransactionType};
use finflow_templates::{Category, FlowTemplate, StateNodeTemplate};

/// Appended to the first step when pre-accounting is folded into it.
pub const PRE_ACCOUNTING_SUFFIX: &str = " + pre-accounting step";

/// A node template that survived filtering, with its final label.
#[derive(Debug, Clone)]
pub(crate) struct Surviving<'a> {
  pub template: &'a StateNodeTemplate,
  pub label: String,
}

/// Whether any feature that produces a workflow lifecycle is switched on.
pub fn workflow_enabled(config: &AppConfig) -> bool {
  match config.transaction_type {
    TransactionType::Card => config.expense_management.enabled || config.approvals.enabled,
    TransactionType::Currency => config.pre_accounting.required || config.approvals.enabled,
    TransactionType::Payment => {
      config.pre_accounting.required
        || config.compliance.hold_enabled
        || config.approvals.enabled
        || config.payment.require_sign_off
    }
  }
}

/// Whether a node of `category` is part of the sequential workflow.
pub fn includes(category: Category, config: &AppConfig) -> bool {
  let pre_accounting = &config.pre_accounting;
  match category {
    Category::ExpenseManagement => config.expense_management.enabled,
    Category::PreAccounting => match config.transaction_type {
      // Folded into the first step, or shown as a parallel branch.
      TransactionType::Payment => {
        !pre_accounting.included_in_first_step
          && !pre_accounting.not_sequential
          && pre_accounting.required
      }
      TransactionType::Currency => !pre_accounting.not_sequential && pre_accounting.required,
      TransactionType::Card => true,
    },
    Category::Compliance => config.compliance.hold_enabled && !config.compliance.not_sequential,
    Category::Approvals => config.approvals.enabled,
    Category::SignOff => config.payment.require_sign_off,
    Category::Core | Category::Complete => true,
  }
}

/// Whether pre-accounting is merged into the first (core) step.
fn folds_pre_accounting(config: &AppConfig) -> bool {
  matches!(
    config.transaction_type,
    TransactionType::Payment | TransactionType::Currency
  ) && config.pre_accounting.required
    && !config.pre_accounting.not_sequential
}

/// The label a template is shown under for `config`.
pub fn final_label(template: &StateNodeTemplate, config: &AppConfig) -> String {
  if template.category == Category::Core && folds_pre_accounting(config) {
    format!("{}{}", template.label, PRE_ACCOUNTING_SUFFIX)
  } else {
    template.label.to_string()
  }
}

/// Filter and relabel `flow` for `config`, keeping template order.
///
/// Returns nothing when the workflow lifecycle is disabled altogether.
pub(crate) fn surviving_nodes<'a>(flow: &'a FlowTemplate, config: &AppConfig) -> Vec<Surviving<'a>> {
  if !workflow_enabled(config) {
    return Vec::new();
  }

  flow
    .nodes
    .iter()
    .filter(|t| includes(t.category, config))
    .map(|template| Surviving {
      template,
      label: final_label(template, config),
    })
    .collect()
}
