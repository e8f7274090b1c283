use std::path::Path;

use mlua::prelude::*;
use tracing::debug;

use crate::bind::Binder;
use crate::lua::globals;

/// Create a new Lua runtime with the `bind` global registered.
pub fn create_runtime(binder: &Binder) -> LuaResult<Lua> {
  let lua = Lua::new();
  globals::register_globals(&lua, binder)?;
  Ok(lua)
}

/// Load and execute a Lua file at the given path.
/// Returns the result of the file execution.
pub fn load_file(lua: &Lua, path: &Path) -> LuaResult<LuaValue> {
  let canonical_path = dunce::canonicalize(path)
    .map_err(|e| LuaError::external(format!("cannot canonicalize '{}': {}", path.display(), e)))?;
  let content = std::fs::read_to_string(&canonical_path)
    .map_err(|e| LuaError::external(format!("cannot read '{}': {}", canonical_path.display(), e)))?;

  debug!(path = %canonical_path.display(), "loading lua file");

  lua
    .load(&content)
    .set_name(format!("@{}", canonical_path.display()))
    .eval::<LuaValue>()
}

/// Load a context file. The file must return a table, which becomes the root
/// that paths are resolved against.
pub fn load_context(lua: &Lua, path: &Path) -> LuaResult<LuaTable> {
  match load_file(lua, path)? {
    LuaValue::Table(root) => Ok(root),
    other => Err(LuaError::external(format!(
      "context file '{}' must return a table, got {}",
      path.display(),
      other.type_name()
    ))),
  }
}
