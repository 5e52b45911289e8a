use serde::{Deserialize, Serialize};

use crate::enums::{FundsPolicy, Lifecycle, TransactionType};
use crate::error::ConfigError;

/// Node spacing applied when none (or a non-positive value) is configured.
const DEFAULT_NODE_SPACING: f64 = 300.0;
const MIN_NODE_SPACING: f64 = 150.0;
const MAX_NODE_SPACING: f64 = 400.0;

const DEFAULT_ZOOM: f64 = 1.0;
const MIN_ZOOM: f64 = 0.5;
const MAX_ZOOM: f64 = 2.0;

/// The full configuration tree for one render pass.
///
/// Every subtree has a default, and `#[serde(default)]` lets partial documents
/// fill the gaps, so `{"transactionType": "card"}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
  pub lifecycle: Lifecycle,
  pub transaction_type: TransactionType,
  pub spacing: SpacingConfig,
  pub expense_management: ExpenseManagementConfig,
  pub approvals: ApprovalsConfig,
  pub payment: PaymentConfig,
  pub pre_accounting: PreAccountingConfig,
  pub compliance: ComplianceConfig,
  pub funds_policy: FundsPolicy,
  pub fx_conversion: FxConversionConfig,
  pub reconciliation: ReconciliationConfig,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      lifecycle: Lifecycle::Transactions,
      transaction_type: TransactionType::Payment,
      spacing: SpacingConfig::default(),
      expense_management: ExpenseManagementConfig::default(),
      approvals: ApprovalsConfig::default(),
      payment: PaymentConfig::default(),
      pre_accounting: PreAccountingConfig::default(),
      compliance: ComplianceConfig::default(),
      funds_policy: FundsPolicy::Strict,
      fx_conversion: FxConversionConfig::default(),
      reconciliation: ReconciliationConfig::default(),
    }
  }
}

impl AppConfig {
  /// Parse a configuration document.
  pub fn from_json(json: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(json)?)
  }

  /// Same configuration with a different transaction type.
  pub fn with_transaction_type(mut self, transaction_type: TransactionType) -> Self {
    self.transaction_type = transaction_type;
    self
  }

  /// Clamp layout parameters into their accepted ranges.
  pub fn normalized(mut self) -> Self {
    self.spacing = self.spacing.normalized();
    self
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacingConfig {
  /// Any number is accepted on load; [`SpacingConfig::normalized`] clamps it.
  pub node_spacing: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub zoom: Option<f64>,
}

impl Default for SpacingConfig {
  fn default() -> Self {
    Self {
      node_spacing: DEFAULT_NODE_SPACING,
      zoom: Some(DEFAULT_ZOOM),
    }
  }
}

impl SpacingConfig {
  pub fn normalized(&self) -> Self {
    let node_spacing = match self.node_spacing {
      n if n.is_finite() && n > 0.0 => n.clamp(MIN_NODE_SPACING, MAX_NODE_SPACING),
      _ => DEFAULT_NODE_SPACING,
    };
    let zoom = match self.zoom {
      Some(z) if z.is_finite() => z.clamp(MIN_ZOOM, MAX_ZOOM),
      _ => DEFAULT_ZOOM,
    };
    Self {
      node_spacing,
      zoom: Some(zoom),
    }
  }

  /// Effective zoom factor.
  pub fn zoom(&self) -> f64 {
    self.zoom.unwrap_or(DEFAULT_ZOOM)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpenseManagementConfig {
  pub enabled: bool,
}

impl Default for ExpenseManagementConfig {
  fn default() -> Self {
    Self { enabled: true }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApprovalsConfig {
  pub enabled: bool,
}

impl Default for ApprovalsConfig {
  fn default() -> Self {
    Self { enabled: true }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentConfig {
  pub require_sign_off: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub multi_payer_sign: Option<bool>,
}

impl Default for PaymentConfig {
  fn default() -> Self {
    Self {
      require_sign_off: true,
      multi_payer_sign: Some(false),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreAccountingConfig {
  pub required: bool,
  pub ai_receipt_scan: bool,
  pub included_in_first_step: bool,
  /// Pre-accounting runs as a parallel branch instead of a sequential step.
  pub not_sequential: bool,
}

impl Default for PreAccountingConfig {
  fn default() -> Self {
    Self {
      required: true,
      ai_receipt_scan: true,
      included_in_first_step: false,
      not_sequential: false,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplianceConfig {
  pub hold_enabled: bool,
  /// Compliance review runs as a parallel branch instead of a sequential step.
  pub not_sequential: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FxConversionConfig {
  pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReconciliationConfig {
  pub auto_reconcile: bool,
}

impl Default for ReconciliationConfig {
  fn default() -> Self {
    Self {
      auto_reconcile: true,
    }
  }
}
