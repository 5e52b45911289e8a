use thiserror::Error;

/// Errors raised while parsing configuration values at the system boundary.
///
/// Derivation itself never fails; these only surface when turning user input
/// (CLI arguments, JSON documents) into typed configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Role name outside the fixed role set.
  #[error("unknown role: {0}")]
  UnknownRole(String),

  #[error("unknown transaction type: {0}")]
  UnknownTransactionType(String),

  #[error("unknown lifecycle: {0}")]
  UnknownLifecycle(String),

  /// The configuration document could not be (de)serialized.
  #[error("invalid configuration document: {0}")]
  Json(#[from] serde_json::Error),
}
