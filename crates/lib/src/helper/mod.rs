//! Helper subexpressions.
//!
//! Templates reference `bind` through a subexpression such as
//! `(bind model.submodel.method "adios" target=model)`. This module parses
//! that form and evaluates it against a root context:
//!
//! - the first positional parameter is the function path
//! - the remaining positional parameters become curried arguments
//! - `target=` supplies the explicit receiver
//!
//! Parameters that are paths are looked up on the root; a missing property
//! evaluates to `nil` rather than failing, the way template lookups behave.
//!
//! # Submodules
//!
//! - [`parse`] - expression parser

pub mod parse;

pub use parse::{ExprError, parse, parse_value};

use mlua::prelude::*;
use thiserror::Error;
use tracing::warn;

use crate::bind::{BindError, Binder, BoundCallable};
use crate::consts::{BIND_HELPER, TARGET_KEY};
use crate::path::DottedPath;
use crate::resolve;

/// A literal value written in an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
  Nil,
  Bool(bool),
  Integer(i64),
  Number(f64),
  String(String),
}

/// A parameter of a helper expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
  Literal(Literal),
  /// `this`, the root context.
  This,
  Path(DottedPath),
}

/// A parsed helper expression: `(name params... key=value...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HelperExpr {
  pub name: String,
  pub params: Vec<Param>,
  pub hash: Vec<(String, Param)>,
}

/// Errors that can occur while evaluating a helper expression.
#[derive(Debug, Error)]
pub enum HelperError {
  #[error("parse error: {0}")]
  Parse(#[from] ExprError),

  #[error("unknown helper '{0}'")]
  UnknownHelper(String),

  #[error("'{helper}' expects a function path as its first argument")]
  ExpectedPath { helper: String },

  #[error(transparent)]
  Bind(#[from] BindError),

  #[error("lua error: {0}")]
  Lua(#[from] LuaError),
}

impl Param {
  /// Evaluate the parameter to a Lua value against `root`.
  pub fn evaluate(&self, lua: &Lua, root: &LuaTable) -> LuaResult<LuaValue> {
    match self {
      Param::Literal(literal) => literal.to_lua(lua),
      Param::This => Ok(LuaValue::Table(root.clone())),
      Param::Path(path) => resolve::lookup(root, path),
    }
  }
}

impl Literal {
  pub fn to_lua(&self, lua: &Lua) -> LuaResult<LuaValue> {
    Ok(match self {
      Literal::Nil => LuaValue::Nil,
      Literal::Bool(b) => LuaValue::Boolean(*b),
      Literal::Integer(n) => LuaValue::Integer(*n),
      Literal::Number(n) => LuaValue::Number(*n),
      Literal::String(s) => LuaValue::String(lua.create_string(s)?),
    })
  }
}

impl HelperExpr {
  /// The value of a hash argument, if present.
  pub fn hash_value(&self, key: &str) -> Option<&Param> {
    self.hash.iter().find(|(k, _)| k == key).map(|(_, v)| v)
  }

  /// Evaluate a `bind` expression into a bound callable.
  ///
  /// # Errors
  ///
  /// Fails if the helper is not `bind`, if its first parameter is not a
  /// path, or if binding the path fails.
  pub fn bind(&self, lua: &Lua, root: &LuaTable, binder: &Binder) -> Result<BoundCallable, HelperError> {
    if self.name != BIND_HELPER {
      return Err(HelperError::UnknownHelper(self.name.clone()));
    }

    let Some((Param::Path(path), rest)) = self.params.split_first() else {
      return Err(HelperError::ExpectedPath {
        helper: self.name.clone(),
      });
    };

    for (key, _) in self.hash.iter().filter(|(k, _)| k != TARGET_KEY) {
      warn!(helper = %self.name, key = %key, "ignoring unknown hash argument");
    }

    let target = self
      .hash_value(TARGET_KEY)
      .map(|param| param.evaluate(lua, root))
      .transpose()?;

    let extra_args = rest
      .iter()
      .map(|param| param.evaluate(lua, root))
      .collect::<LuaResult<Vec<_>>>()?;

    Ok(binder.bind_path(root, path, target, extra_args)?)
  }
}

/// Parse and evaluate a helper expression in one step.
pub fn evaluate(input: &str, lua: &Lua, root: &LuaTable, binder: &Binder) -> Result<BoundCallable, HelperError> {
  parse(input)?.bind(lua, root, binder)
}
