//! Finflow Config
//!
//! This crate contains the configuration tree that drives lifecycle derivation.
//! A configuration is a set of feature toggles (approvals, pre-accounting,
//! compliance hold, payment sign-off, ...) plus the selected transaction type
//! and a few layout parameters.
//!
//! Configuration can be loaded from:
//! - JSON documents produced by the settings UI (camelCase keys)
//! - Export documents written by [`ConfigExport`]
//!
//! Missing keys fall back to the documented defaults, so partial documents are
//! accepted. Derivation never rejects a configuration; callers are expected to
//! run [`AppConfig::normalized`] before handing it to the engine.

mod config;
mod enums;
mod error;
mod export;
mod role;

pub use config::{
  AppConfig, ApprovalsConfig, ComplianceConfig, ExpenseManagementConfig, FxConversionConfig,
  PaymentConfig, PreAccountingConfig, ReconciliationConfig, SpacingConfig,
};
pub use enums::{FundsPolicy, Lifecycle, TransactionType};
pub use error::ConfigError;
pub use export::{ConfigExport, EXPORT_FILE_NAME};
pub use role::{ApprovalLevel, Role};
