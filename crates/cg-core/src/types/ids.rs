//! Identifier lists accepted either as one string or as a sequence.

use serde::{Deserialize, Serialize};

/// A list-of-identifiers parameter such as `ids`, `coin_ids` or
/// `contract_addresses`.
///
/// The API wants a single comma-separated value. A sequence is trimmed and
/// joined with `,`, skipping blank entries; a single string is passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdList {
  /// Already comma-separated (or a single id)
  Joined(String),
  /// Individual identifiers
  Many(Vec<String>),
}

impl IdList {
  /// The comma-joined value placed in the query string
  pub fn joined(&self) -> String {
    match self {
      IdList::Joined(s) => s.clone(),
      IdList::Many(items) => items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(","),
    }
  }

  /// True when there is nothing to send
  pub fn is_empty(&self) -> bool {
    match self {
      IdList::Joined(s) => s.trim().is_empty(),
      IdList::Many(items) => items.iter().all(|item| item.trim().is_empty()),
    }
  }
}

impl From<&str> for IdList {
  fn from(value: &str) -> Self {
    IdList::Joined(value.to_string())
  }
}

impl From<String> for IdList {
  fn from(value: String) -> Self {
    IdList::Joined(value)
  }
}

impl From<Vec<String>> for IdList {
  fn from(value: Vec<String>) -> Self {
    IdList::Many(value)
  }
}

impl From<Vec<&str>> for IdList {
  fn from(value: Vec<&str>) -> Self {
    IdList::Many(value.into_iter().map(str::to_string).collect())
  }
}

impl<const N: usize> From<[&str; N]> for IdList {
  fn from(value: [&str; N]) -> Self {
    IdList::Many(value.iter().map(|s| s.to_string()).collect())
  }
}

impl From<&[&str]> for IdList {
  fn from(value: &[&str]) -> Self {
    IdList::Many(value.iter().map(|s| s.to_string()).collect())
  }
}
