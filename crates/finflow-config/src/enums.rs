use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which lifecycle the viewer is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
  #[default]
  Transactions,
  Workflows,
}

impl Lifecycle {
  pub fn as_str(&self) -> &'static str {
    match self {
      Lifecycle::Transactions => "transactions",
      Lifecycle::Workflows => "workflows",
    }
  }
}

impl fmt::Display for Lifecycle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Lifecycle {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "transactions" => Ok(Lifecycle::Transactions),
      "workflows" => Ok(Lifecycle::Workflows),
      other => Err(ConfigError::UnknownLifecycle(other.to_string())),
    }
  }
}

/// The kind of financial operation whose lifecycle is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
  Card,
  #[default]
  Payment,
  Currency,
}

impl TransactionType {
  pub const ALL: [TransactionType; 3] = [
    TransactionType::Card,
    TransactionType::Payment,
    TransactionType::Currency,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      TransactionType::Card => "card",
      TransactionType::Payment => "payment",
      TransactionType::Currency => "currency",
    }
  }

  /// Human readable name, as shown in the transaction type selector.
  pub fn display_name(&self) -> &'static str {
    match self {
      TransactionType::Card => "Card Transaction",
      TransactionType::Payment => "Payment Transaction",
      TransactionType::Currency => "Currency Exchange",
    }
  }
}

impl fmt::Display for TransactionType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for TransactionType {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "card" => Ok(TransactionType::Card),
      "payment" => Ok(TransactionType::Payment),
      "currency" => Ok(TransactionType::Currency),
      other => Err(ConfigError::UnknownTransactionType(other.to_string())),
    }
  }
}

/// How strictly available funds are checked before scheduling a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundsPolicy {
  #[default]
  Strict,
  Lenient,
}
