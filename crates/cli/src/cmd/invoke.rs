//! Implementation of the `pbind invoke` command.
//!
//! Loads a context file, evaluates a bind expression against it, and calls
//! the bound function once with the given call-time arguments.

use std::path::Path;

use anyhow::{Context, Result};
use mlua::prelude::LuaMultiValue;
use tracing::debug;

use pathbind_lib::helper::{self, parse_value};
use pathbind_lib::lua::convert::multi_to_json;
use pathbind_lib::lua::runtime::{create_runtime, load_context};
use pathbind_lib::{BindConfig, Binder};

use crate::output::{OutputFormat, print_info, print_json};

pub fn cmd_invoke(context: &str, expr: &str, args: &[String], config: &BindConfig, output: OutputFormat) -> Result<()> {
  let binder = Binder::from_config(config);
  let lua = create_runtime(&binder).context("Failed to create Lua runtime")?;
  let root = load_context(&lua, Path::new(context)).with_context(|| format!("Failed to load context: {}", context))?;

  let callable = helper::evaluate(expr, &lua, &root, &binder).with_context(|| format!("Failed to bind: {}", expr))?;

  let call_args = args
    .iter()
    .map(|arg| {
      let param = parse_value(arg).with_context(|| format!("Invalid argument: {}", arg))?;
      param
        .evaluate(&lua, &root)
        .with_context(|| format!("Failed to evaluate argument: {}", arg))
    })
    .collect::<Result<LuaMultiValue>>()?;

  debug!(expr, args = call_args.len(), "invoking bound function");

  let results: LuaMultiValue = callable
    .invoke(call_args)
    .with_context(|| format!("Invocation failed: {}", expr))?;
  let values = multi_to_json(&lua, results).context("Failed to convert return values")?;

  if output.is_json() {
    return print_json(&values);
  }

  if values.is_empty() {
    print_info("No return value");
  }
  for value in &values {
    println!("{}", serde_json::to_string(value).context("Failed to serialize return value")?);
  }
  Ok(())
}
