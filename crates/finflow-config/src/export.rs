use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::ConfigError;

/// File name suggested for exported configurations.
pub const EXPORT_FILE_NAME: &str = "flowchart-config.json";

/// A configuration snapshot with the time it was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigExport {
  pub config: AppConfig,
  pub timestamp: DateTime<Utc>,
}

impl ConfigExport {
  /// Snapshot `config` at the current time.
  pub fn new(config: AppConfig) -> Self {
    Self::at(config, Utc::now())
  }

  pub fn at(config: AppConfig, timestamp: DateTime<Utc>) -> Self {
    Self { config, timestamp }
  }

  pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  pub fn from_json(json: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(json)?)
  }
}
