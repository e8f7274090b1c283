//! Conversion of Lua values for reporting.

use mlua::prelude::*;

/// Convert a Lua value to JSON. Functions and other values without a JSON
/// form become `null`; recursive tables are an error.
pub fn to_json(lua: &Lua, value: LuaValue) -> LuaResult<serde_json::Value> {
  let options = LuaDeserializeOptions::new()
    .deny_unsupported_types(false)
    .deny_recursive_tables(true);
  lua.from_value_with(value, options)
}

/// Convert every value of a multi-value result.
pub fn multi_to_json(lua: &Lua, values: LuaMultiValue) -> LuaResult<Vec<serde_json::Value>> {
  values.into_iter().map(|v| to_json(lua, v)).collect()
}
