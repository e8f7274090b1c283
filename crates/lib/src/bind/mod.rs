//! The `bind` helper.
//!
//! `bind` turns a dotted path into a [`BoundCallable`]: the function named by
//! the path, the receiver it should run with, and any leading arguments.
//! The receiver is the explicit target when one is given, otherwise the
//! function's owner (the value one segment up the path, stepping over a
//! trailing `actions` namespace), otherwise the root.
//!
//! All validation happens here, at bind time; invoking the result never
//! touches the path again.
//!
//! # Submodules
//!
//! - [`lua`] - the `bind` global exposed to Lua scripts

pub mod lua;
mod types;

pub use types::*;

use mlua::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::config::BindConfig;
use crate::path::{DottedPath, InvalidPathError};
use crate::resolve::{self, Resolution, ResolveError, UnresolvedPathError};

/// Errors that can occur while binding a path.
#[derive(Debug, Error)]
pub enum BindError {
  #[error(transparent)]
  InvalidPath(#[from] InvalidPathError),

  #[error(transparent)]
  UnresolvedPath(#[from] UnresolvedPathError),

  #[error("lua error: {0}")]
  Lua(#[from] LuaError),
}

impl From<ResolveError> for BindError {
  fn from(err: ResolveError) -> Self {
    match err {
      ResolveError::Unresolved(e) => BindError::UnresolvedPath(e),
      ResolveError::Lua(e) => BindError::Lua(e),
    }
  }
}

impl From<BindError> for LuaError {
  fn from(err: BindError) -> Self {
    match err {
      BindError::Lua(e) => e,
      other => LuaError::external(other),
    }
  }
}

/// Resolves paths and produces bound callables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binder {
  ignored_namespace: Option<String>,
}

impl Default for Binder {
  fn default() -> Self {
    Self::from_config(&BindConfig::default())
  }
}

impl Binder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_config(config: &BindConfig) -> Self {
    Self {
      ignored_namespace: config.ignored_namespace.clone(),
    }
  }

  /// Use a different namespace segment, or `None` to never skip one.
  pub fn with_ignored_namespace(mut self, namespace: Option<impl Into<String>>) -> Self {
    self.ignored_namespace = namespace.map(Into::into);
    self
  }

  pub fn ignored_namespace(&self) -> Option<&str> {
    self.ignored_namespace.as_deref()
  }

  /// Resolve `path` against `root` without binding anything.
  pub fn resolve(&self, root: &LuaTable, path: &DottedPath) -> Result<Resolution, BindError> {
    Ok(resolve::resolve(root, path, self.ignored_namespace())?)
  }

  /// Bind the function at `path`.
  ///
  /// `target` overrides the inferred receiver; `Some(LuaValue::Nil)` counts
  /// as no target. `extra_args` are prepended to the arguments of every call.
  ///
  /// # Errors
  ///
  /// Returns [`BindError::InvalidPath`] for a malformed path and
  /// [`BindError::UnresolvedPath`] when the path does not lead to a function.
  pub fn bind(
    &self,
    root: &LuaTable,
    path: &str,
    target: Option<LuaValue>,
    extra_args: impl IntoIterator<Item = LuaValue>,
  ) -> Result<BoundCallable, BindError> {
    let path = DottedPath::parse(path)?;
    self.bind_path(root, &path, target, extra_args)
  }

  /// Like [`Binder::bind`], for an already parsed path.
  pub fn bind_path(
    &self,
    root: &LuaTable,
    path: &DottedPath,
    target: Option<LuaValue>,
    extra_args: impl IntoIterator<Item = LuaValue>,
  ) -> Result<BoundCallable, BindError> {
    let resolution = self.resolve(root, path)?;
    let explicit = target.filter(|t| !t.is_nil());
    let bound_args: Vec<LuaValue> = extra_args.into_iter().collect();

    let receiver_label = match explicit {
      Some(_) => "target".to_string(),
      None => resolution.owner_display(),
    };
    debug!(path = %path, receiver = %receiver_label, args = bound_args.len(), "bound function");

    let receiver = explicit.unwrap_or(resolution.owner);
    Ok(BoundCallable::new(resolution.callee, receiver, bound_args))
  }
}

/// Bind `path` with the default configuration (`actions` namespace skipped).
pub fn bind(
  root: &LuaTable,
  path: &str,
  target: Option<LuaValue>,
  extra_args: impl IntoIterator<Item = LuaValue>,
) -> Result<BoundCallable, BindError> {
  Binder::default().bind(root, path, target, extra_args)
}
