use finflow_config::TransactionType;

use crate::catalog;
use crate::types::FlowTemplate;

/// Provides the template set for a transaction type.
///
/// The engine is generic over this so alternative catalogs (or test fixtures)
/// can be plugged in without touching the derivation rules.
pub trait TemplateSource {
  fn flow(&self, transaction_type: TransactionType) -> &FlowTemplate;
}

/// The built-in catalog from [`catalog`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTemplates;

impl TemplateSource for StaticTemplates {
  fn flow(&self, transaction_type: TransactionType) -> &FlowTemplate {
    match transaction_type {
      TransactionType::Card => &catalog::CARD,
      TransactionType::Payment => &catalog::PAYMENT,
      TransactionType::Currency => &catalog::CURRENCY,
    }
  }
}

impl<T: TemplateSource + ?Sized> TemplateSource for &T {
  fn flow(&self, transaction_type: TransactionType) -> &FlowTemplate {
    (**self).flow(transaction_type)
  }
}
