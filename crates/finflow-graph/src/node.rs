use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

/// A state as shown in a derived graph. `id` and `label` are the same final label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateNode {
  pub id: String,
  pub label: String,
  pub position: Position,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub badges: Vec<String>,
}

impl StateNode {
  /// Build a node identified by `label`, placed at `x` on the main row.
  pub fn new(label: impl Into<String>, x: f64) -> Self {
    let label = label.into();
    Self {
      id: label.clone(),
      label,
      position: Position { x, y: 0.0 },
      badges: Vec::new(),
    }
  }

  pub fn with_badges<I, S>(mut self, badges: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.badges = badges.into_iter().map(Into::into).collect();
    self
  }
}
