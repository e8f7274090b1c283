use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pathbind_lib::BindConfig;

mod cmd;
mod output;

use cmd::{cmd_info, cmd_invoke, cmd_resolve};
use output::{OutputFormat, print_error};

/// pbind - bind functions to receivers by dotted path
#[derive(Parser)]
#[command(name = "pbind")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Namespace segment skipped when inferring a receiver (default: actions)
  #[arg(long, global = true, value_name = "NAME", conflicts_with = "no_ignore_namespace")]
  ignore_namespace: Option<String>,

  /// Never skip a namespace segment when inferring a receiver
  #[arg(long, global = true)]
  no_ignore_namespace: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate a bind expression against a context file and invoke the result
  Invoke {
    /// Lua file returning the root context table
    context: String,

    /// Helper expression, e.g. '(bind model.save "draft" target=model)'
    expr: String,

    /// Call-time arguments (literals, `this` or paths on the context)
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,
  },

  /// Show which function and receiver a path resolves to
  Resolve {
    /// Lua file returning the root context table
    context: String,

    /// Dotted path, e.g. model.actions.save
    path: String,
  },

  /// Show version and effective configuration
  Info,
}

impl Cli {
  /// Environment configuration with command-line overrides applied.
  fn config(&self) -> BindConfig {
    let config = BindConfig::from_env();
    if self.no_ignore_namespace {
      config.with_ignored_namespace(None::<String>)
    } else if let Some(ns) = &self.ignore_namespace {
      config.with_ignored_namespace(Some(ns.clone()))
    } else {
      config
    }
  }
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  if let Err(e) = run(&cli) {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn run(cli: &Cli) -> Result<()> {
  let config = cli.config();

  match &cli.command {
    Commands::Invoke { context, expr, args } => cmd_invoke(context, expr, args, &config, cli.output),
    Commands::Resolve { context, path } => cmd_resolve(context, path, &config, cli.output),
    Commands::Info => cmd_info(&config, cli.output),
  }
}
