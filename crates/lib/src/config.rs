//! Binder configuration.
//!
//! The only tunable is the namespace segment that gets skipped when a
//! receiver is inferred from a path. It defaults to `actions` and can be
//! overridden with `PATHBIND_IGNORED_NAMESPACE` (an empty value disables
//! skipping entirely).

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_IGNORED_NAMESPACE, IGNORED_NAMESPACE_ENV};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindConfig {
  /// Owner segment skipped during receiver inference, `None` to disable.
  pub ignored_namespace: Option<String>,
}

impl Default for BindConfig {
  fn default() -> Self {
    Self {
      ignored_namespace: Some(DEFAULT_IGNORED_NAMESPACE.to_string()),
    }
  }
}

impl BindConfig {
  /// Build a config from the process environment, falling back to defaults.
  pub fn from_env() -> Self {
    match std::env::var(IGNORED_NAMESPACE_ENV) {
      Ok(value) => Self::default().with_ignored_namespace(Some(value)),
      Err(_) => Self::default(),
    }
  }

  /// Replace the ignored namespace. Empty or whitespace-only names disable skipping.
  pub fn with_ignored_namespace(mut self, namespace: Option<impl Into<String>>) -> Self {
    self.ignored_namespace = namespace
      .map(Into::into)
      .map(|ns| ns.trim().to_string())
      .filter(|ns| !ns.is_empty());
    self
  }
}
