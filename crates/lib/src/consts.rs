//! Crate-wide constants.

/// Owner segment skipped when computing a receiver (`model.actions.save` binds to `model`).
pub const DEFAULT_IGNORED_NAMESPACE: &str = "actions";

/// Environment variable overriding the ignored namespace. An empty value disables skipping.
pub const IGNORED_NAMESPACE_ENV: &str = "PATHBIND_IGNORED_NAMESPACE";

/// Leading path segment referring to the root context itself.
pub const THIS_SEGMENT: &str = "this";

/// Name of the only helper understood by the expression evaluator.
pub const BIND_HELPER: &str = "bind";

/// Hash key naming the explicit receiver in a helper expression.
pub const TARGET_KEY: &str = "target";
