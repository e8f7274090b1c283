//! Global Lua values.
//!
//! This module registers:
//! - `bind(root, path, target, ...)` - bind a function by dotted path
//! - `pathbind.bind` - the same function
//! - `pathbind.version` - crate version
//! - `pathbind.ignored_namespace` - namespace skipped during receiver inference (or nil)

use mlua::prelude::*;

use crate::bind::Binder;
use crate::bind::lua::{create_bind_function, register_bind};

/// Register the `bind` global and the `pathbind` table in the Lua runtime.
pub fn register_globals(lua: &Lua, binder: &Binder) -> LuaResult<()> {
  let pathbind = lua.create_table()?;

  pathbind.set("version", env!("CARGO_PKG_VERSION"))?;
  pathbind.set("ignored_namespace", binder.ignored_namespace())?;
  pathbind.set("bind", create_bind_function(lua, binder.clone())?)?;

  register_bind(lua, &lua.globals(), binder.clone())?;
  lua.globals().set("pathbind", pathbind)?;

  Ok(())
}
