//! Lua bindings for `bind(root, path, target, ...)`.
//!
//! The Lua-facing `bind` returns a plain function, so scripts can store it,
//! pass it as an event handler, or bind it again.

use mlua::prelude::*;

use crate::bind::{BindError, Binder};
use crate::path::InvalidPathError;

/// Create the Lua `bind` function backed by `binder`.
///
/// ```lua
/// local save = bind(ctx, "model.actions.save", nil, "draft")
/// save(event) -- model:save("draft", event)
/// ```
pub fn create_bind_function(lua: &Lua, binder: Binder) -> LuaResult<LuaFunction> {
  lua.create_function(
    move |lua, (root, path, target, extra): (LuaTable, LuaValue, LuaValue, LuaVariadic<LuaValue>)| {
      let path = match path {
        LuaValue::String(s) => s.to_str()?.to_string(),
        other => {
          return Err(
            BindError::InvalidPath(InvalidPathError::NotAString {
              type_name: other.type_name().to_string(),
            })
            .into(),
          );
        }
      };

      let callable = binder.bind(&root, &path, Some(target), extra.iter().cloned())?;
      callable.into_function(lua)
    },
  )
}

/// Register `bind` on the given table.
pub fn register_bind(lua: &Lua, table: &LuaTable, binder: Binder) -> LuaResult<()> {
  table.set("bind", create_bind_function(lua, binder)?)
}
