//! The bound callable produced by `bind`.
//!
//! A [`BoundCallable`] pairs a Lua callable with the receiver it must be
//! called with and the arguments curried at bind time. Lua has no implicit
//! `this`; the receiver is passed as the first argument, the same way a
//! `obj:method(...)` call passes `obj` as `self`.
//!
//! The Lua-facing form is a Lua closure, so a receiver that stores its own
//! handler can still be collected.

use mlua::prelude::*;

use crate::resolve::Callee;

const WRAPPER_KEY: &str = "pathbind.bound_wrapper";

const WRAPPER_SOURCE: &str = r#"
local pack, unpack = table.pack, table.unpack

return function(callee, receiver, ...)
  local bound = pack(...)
  if bound.n == 0 then
    return function(...)
      return callee(receiver, ...)
    end
  end
  return function(...)
    local call = pack(...)
    local args = { receiver, unpack(bound, 1, bound.n) }
    for i = 1, call.n do
      args[bound.n + 1 + i] = call[i]
    end
    return callee(unpack(args, 1, bound.n + 1 + call.n))
  end
end
"#;

/// Callable + receiver + leading arguments, fixed at bind time.
#[derive(Debug, Clone)]
pub struct BoundCallable {
  callee: Callee,
  receiver: LuaValue,
  bound_args: Vec<LuaValue>,
}

impl BoundCallable {
  pub fn new(callee: impl Into<Callee>, receiver: LuaValue, bound_args: Vec<LuaValue>) -> Self {
    Self {
      callee: callee.into(),
      receiver,
      bound_args,
    }
  }

  pub fn callee(&self) -> &Callee {
    &self.callee
  }

  pub fn receiver(&self) -> &LuaValue {
    &self.receiver
  }

  pub fn bound_args(&self) -> &[LuaValue] {
    &self.bound_args
  }

  /// Call as `callee(receiver, bound_args..., call_args...)`.
  ///
  /// Errors raised by the callee are returned untouched.
  pub fn invoke<R: FromLuaMulti>(&self, call_args: LuaMultiValue) -> LuaResult<R> {
    let args: LuaMultiValue = std::iter::once(self.receiver.clone())
      .chain(self.bound_args.iter().cloned())
      .chain(call_args)
      .collect();
    self.callee.call(args)
  }

  /// Wrap the callable as a plain Lua function so scripts can call (or re-bind) it.
  pub fn into_function(self, lua: &Lua) -> LuaResult<LuaFunction> {
    let args: LuaMultiValue = [self.callee.to_value(), self.receiver]
      .into_iter()
      .chain(self.bound_args)
      .collect();
    wrapper(lua)?.call(args)
  }
}

fn wrapper(lua: &Lua) -> LuaResult<LuaFunction> {
  if let Some(wrapper) = lua.named_registry_value::<Option<LuaFunction>>(WRAPPER_KEY)? {
    return Ok(wrapper);
  }
  let wrapper: LuaFunction = lua.load(WRAPPER_SOURCE).set_name("=pathbind.wrapper").eval()?;
  lua.set_named_registry_value(WRAPPER_KEY, wrapper.clone())?;
  Ok(wrapper)
}
