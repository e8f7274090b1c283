//! Implementation of the `pbind resolve` command.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use pathbind_lib::lua::runtime::{create_runtime, load_context};
use pathbind_lib::{BindConfig, Binder, DottedPath};

use crate::output::{OutputFormat, print_json, print_stat, print_success};

#[derive(Serialize)]
struct ResolveReport {
  function: String,
  receiver: String,
  namespace_skipped: bool,
}

pub fn cmd_resolve(context: &str, path: &str, config: &BindConfig, output: OutputFormat) -> Result<()> {
  let binder = Binder::from_config(config);
  let lua = create_runtime(&binder).context("Failed to create Lua runtime")?;
  let root = load_context(&lua, Path::new(context)).with_context(|| format!("Failed to load context: {}", context))?;

  let dotted = DottedPath::parse(path).with_context(|| format!("Invalid path: {}", path))?;
  let resolution = binder
    .resolve(&root, &dotted)
    .with_context(|| format!("Failed to resolve: {}", path))?;

  let report = ResolveReport {
    function: dotted.to_string(),
    receiver: resolution.owner_display(),
    namespace_skipped: resolution.namespace_skipped,
  };

  if output.is_json() {
    return print_json(&report);
  }

  print_success(&format!("Resolved {}", report.function));
  print_stat("Receiver", &report.receiver);
  if report.namespace_skipped {
    print_stat(
      "Skipped namespace",
      binder.ignored_namespace().unwrap_or_default(),
    );
  }
  Ok(())
}
