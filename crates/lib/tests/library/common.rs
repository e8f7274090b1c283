//! Shared helpers for library integration tests.

use mlua::prelude::*;
use pathbind_lib::Binder;
use pathbind_lib::helper;
use pathbind_lib::lua::runtime::create_runtime;

/// Context mirroring a component test: `model`, `model.submodel`, `actions`
/// (shared by the root and `model`) and a root-level `method`. Every method
/// records `self` and its arguments in the global `last`.
const CONTEXT: &str = r#"
local function record(self, ...)
  last = { context = self, args = table.pack(...) }
end

local submodel = { method = record }
local actions = { method = record }
local model = { method = record, submodel = submodel, actions = actions }

return { model = model, method = record, actions = actions }
"#;

/// Create a runtime plus the root context table.
pub fn create_test_runtime() -> LuaResult<(Lua, LuaTable)> {
  let lua = create_runtime(&Binder::default())?;
  let root: LuaTable = lua.load(CONTEXT).eval()?;
  Ok((lua, root))
}

/// Evaluate a helper expression and fire it like a click with no event arguments.
pub fn call_action(lua: &Lua, root: &LuaTable, expr: &str) -> LuaResult<()> {
  let callable = helper::evaluate(expr, lua, root, &Binder::default()).map_err(LuaError::external)?;
  callable.invoke(LuaMultiValue::new())
}

/// Resolve a dotted path on the root, `this` meaning the root itself.
pub fn get(root: &LuaTable, path: &str) -> LuaResult<LuaTable> {
  let mut current = root.clone();
  for segment in path.split('.').filter(|s| *s != "this") {
    current = current.get(segment)?;
  }
  Ok(current)
}

/// Assert that the last recorded call ran with `expected` as its receiver.
pub fn assert_context(lua: &Lua, expected: &LuaTable) -> LuaResult<()> {
  let last: LuaTable = lua.globals().get("last")?;
  let actual: LuaValue = last.get("context")?;
  assert_eq!(actual.as_table(), Some(expected), "unexpected receiver");
  Ok(())
}

/// Return the arguments of the last recorded call.
pub fn last_arguments(lua: &Lua) -> LuaResult<Vec<LuaValue>> {
  let last: LuaTable = lua.globals().get("last")?;
  let packed: LuaTable = last.get("args")?;
  let count: usize = packed.get("n")?;
  (1..=count).map(|i| packed.get(i)).collect()
}
