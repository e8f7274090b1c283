use anyhow::Result;
use serde::Serialize;

use pathbind_lib::BindConfig;
use pathbind_lib::consts::IGNORED_NAMESPACE_ENV;

use crate::output::{OutputFormat, print_json, print_stat};

#[derive(Serialize)]
struct Info<'a> {
  version: &'static str,
  config: &'a BindConfig,
}

pub fn cmd_info(config: &BindConfig, output: OutputFormat) -> Result<()> {
  if output.is_json() {
    return print_json(&Info {
      version: env!("CARGO_PKG_VERSION"),
      config,
    });
  }

  println!("pbind {}", env!("CARGO_PKG_VERSION"));
  print_stat(
    "Ignored namespace",
    config.ignored_namespace.as_deref().unwrap_or("(none)"),
  );
  print_stat("Override with", IGNORED_NAMESPACE_ENV);
  Ok(())
}
