use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Approval tier. Approver roles and approval states both carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApprovalLevel {
  L1,
  L2,
  L3,
}

impl ApprovalLevel {
  pub fn number(&self) -> u8 {
    match self {
      ApprovalLevel::L1 => 1,
      ApprovalLevel::L2 => 2,
      ApprovalLevel::L3 => 3,
    }
  }
}

impl fmt::Display for ApprovalLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "L{}", self.number())
  }
}

/// A user role. Used purely as a lookup key for action visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
  Requester,
  Accountant,
  ApproverL1,
  ApproverL2,
  ApproverL3,
  Payer,
  Compliance,
  Admin,
}

impl Role {
  /// All roles, in selector order.
  pub const ALL: [Role; 8] = [
    Role::Requester,
    Role::Accountant,
    Role::ApproverL1,
    Role::ApproverL2,
    Role::ApproverL3,
    Role::Payer,
    Role::Compliance,
    Role::Admin,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Requester => "Requester",
      Role::Accountant => "Accountant",
      Role::ApproverL1 => "ApproverL1",
      Role::ApproverL2 => "ApproverL2",
      Role::ApproverL3 => "ApproverL3",
      Role::Payer => "Payer",
      Role::Compliance => "Compliance",
      Role::Admin => "Admin",
    }
  }

  /// The approval tier this role signs off on, if it is an approver.
  pub fn approval_level(&self) -> Option<ApprovalLevel> {
    match self {
      Role::ApproverL1 => Some(ApprovalLevel::L1),
      Role::ApproverL2 => Some(ApprovalLevel::L2),
      Role::ApproverL3 => Some(ApprovalLevel::L3),
      _ => None,
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Role {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Role::ALL
      .into_iter()
      .find(|role| role.as_str() == s)
      .ok_or_else(|| ConfigError::UnknownRole(s.to_string()))
  }
}
