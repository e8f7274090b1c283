//! Path resolution against a root table.
//!
//! Resolution walks the owner segments of a [`DottedPath`] from the root,
//! looks up the terminal callable on the last value reached, and works out
//! which value should act as its natural receiver.

use mlua::prelude::*;
use thiserror::Error;
use tracing::trace;

use crate::path::{DottedPath, display_segments};

/// Errors raised when a well-formed path does not lead to a callable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnresolvedPathError {
  #[error("unresolved path '{path}': '{segment}' is not defined")]
  Missing { path: String, segment: String },

  #[error("unresolved path '{path}': cannot look up '{segment}' on a {type_name}")]
  NotIndexable {
    path: String,
    segment: String,
    type_name: String,
  },

  #[error("unresolved path '{path}': '{segment}' is a {type_name}, not callable")]
  NotCallable {
    path: String,
    segment: String,
    type_name: String,
  },
}

/// Something that can be called: a function, or a table or userdata whose
/// metatable has a `__call` field.
#[derive(Debug, Clone)]
pub enum Callee {
  Function(LuaFunction),
  Object { value: LuaValue, call: LuaFunction },
}

impl Callee {
  /// Classify `value`, returning `None` when Lua could not call it.
  pub fn from_value(value: LuaValue) -> LuaResult<Option<Self>> {
    let call = match &value {
      LuaValue::Function(f) => return Ok(Some(Callee::Function(f.clone()))),
      LuaValue::Table(t) => match t.metatable() {
        Some(mt) => mt.raw_get(LuaMetaMethod::Call.name())?,
        None => LuaValue::Nil,
      },
      LuaValue::UserData(ud) => ud.metatable()?.get(LuaMetaMethod::Call.name())?,
      _ => LuaValue::Nil,
    };

    match call {
      LuaValue::Function(call) => Ok(Some(Callee::Object { value, call })),
      _ => Ok(None),
    }
  }

  /// The value as Lua sees it.
  pub fn to_value(&self) -> LuaValue {
    match self {
      Callee::Function(f) => LuaValue::Function(f.clone()),
      Callee::Object { value, .. } => value.clone(),
    }
  }

  /// Call with `args`; objects receive themselves first, as `__call` does.
  pub fn call<R: FromLuaMulti>(&self, args: LuaMultiValue) -> LuaResult<R> {
    match self {
      Callee::Function(f) => f.call(args),
      Callee::Object { value, call } => {
        let args: LuaMultiValue = std::iter::once(value.clone()).chain(args).collect();
        call.call(args)
      }
    }
  }
}

impl From<LuaFunction> for Callee {
  fn from(function: LuaFunction) -> Self {
    Callee::Function(function)
  }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone)]
pub struct Resolution {
  /// The terminal callable.
  pub callee: Callee,
  /// Natural receiver of the function.
  pub owner: LuaValue,
  /// Segments naming `owner`, empty for the root.
  pub owner_path: Vec<String>,
  /// Whether an ignored namespace segment was stepped over.
  pub namespace_skipped: bool,
}

impl Resolution {
  /// Owner path for display, `this` for the root.
  pub fn owner_display(&self) -> String {
    display_segments(&self.owner_path)
  }
}

/// Error type of [`resolve`]; either the path does not resolve or the VM failed.
#[derive(Debug, Error)]
pub enum ResolveError {
  #[error(transparent)]
  Unresolved(#[from] UnresolvedPathError),

  #[error("lua error: {0}")]
  Lua(#[from] LuaError),
}

/// Resolve `path` against `root`.
///
/// When the last owner segment equals `ignored_namespace`, the receiver is the
/// value containing that namespace rather than the namespace itself. Only one
/// trailing namespace segment is skipped.
pub fn resolve(root: &LuaTable, path: &DottedPath, ignored_namespace: Option<&str>) -> Result<Resolution, ResolveError> {
  let owner_segments = path.owner();

  // chain[i] is the value reached after i owner segments; chain[0] is the root
  let mut chain = Vec::with_capacity(owner_segments.len() + 1);
  chain.push(LuaValue::Table(root.clone()));

  for segment in owner_segments {
    let current = &chain[chain.len() - 1];
    let next = lookup_segment(current, segment).map_err(|e| annotate(e, path))?;
    if next.is_nil() {
      return Err(
        UnresolvedPathError::Missing {
          path: path.to_string(),
          segment: segment.clone(),
        }
        .into(),
      );
    }
    chain.push(next);
  }

  let container = &chain[chain.len() - 1];
  let value = lookup_segment(container, path.name()).map_err(|e| annotate(e, path))?;
  if value.is_nil() {
    return Err(
      UnresolvedPathError::Missing {
        path: path.to_string(),
        segment: path.name().to_string(),
      }
      .into(),
    );
  }

  let type_name = value.type_name();
  let Some(callee) = Callee::from_value(value)? else {
    return Err(
      UnresolvedPathError::NotCallable {
        path: path.to_string(),
        segment: path.name().to_string(),
        type_name: type_name.to_string(),
      }
      .into(),
    );
  };

  let namespace_skipped = match (owner_segments.last(), ignored_namespace) {
    (Some(last), Some(ns)) => last == ns,
    _ => false,
  };

  let owner_depth = if namespace_skipped {
    owner_segments.len() - 1
  } else {
    owner_segments.len()
  };

  trace!(
    path = %path,
    owner = %display_segments(&owner_segments[..owner_depth]),
    namespace_skipped,
    "resolved path"
  );

  Ok(Resolution {
    callee,
    owner: chain[owner_depth].clone(),
    owner_path: owner_segments[..owner_depth].to_vec(),
    namespace_skipped,
  })
}

/// Plain property lookup used for template values: missing segments yield `nil`.
pub fn lookup(root: &LuaTable, path: &DottedPath) -> LuaResult<LuaValue> {
  let mut current = LuaValue::Table(root.clone());
  for segment in path.segments() {
    current = match lookup_segment(&current, segment) {
      Ok(value) => value,
      Err(SegmentError::NotIndexable { .. }) => return Ok(LuaValue::Nil),
      Err(SegmentError::Lua(e)) => return Err(e),
    };
    if current.is_nil() {
      return Ok(LuaValue::Nil);
    }
  }
  Ok(current)
}

enum SegmentError {
  NotIndexable { segment: String, type_name: String },
  Lua(LuaError),
}

fn annotate(err: SegmentError, path: &DottedPath) -> ResolveError {
  match err {
    SegmentError::NotIndexable { segment, type_name } => UnresolvedPathError::NotIndexable {
      path: path.to_string(),
      segment,
      type_name,
    }
    .into(),
    SegmentError::Lua(e) => ResolveError::Lua(e),
  }
}

/// Look up one segment on a table. Digit-only segments fall back to integer keys.
fn lookup_segment(value: &LuaValue, segment: &str) -> Result<LuaValue, SegmentError> {
  let LuaValue::Table(table) = value else {
    return Err(SegmentError::NotIndexable {
      segment: segment.to_string(),
      type_name: value.type_name().to_string(),
    });
  };

  let found: LuaValue = table.get(segment).map_err(SegmentError::Lua)?;
  if !found.is_nil() {
    return Ok(found);
  }

  match segment.parse::<i64>() {
    Ok(index) => table.get(index).map_err(SegmentError::Lua),
    Err(_) => Ok(LuaValue::Nil),
  }
}
