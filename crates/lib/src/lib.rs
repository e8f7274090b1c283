//! pathbind-lib: bind functions to receivers by dotted path.
//!
//! This crate provides the `bind` template helper and the pieces around it:
//! - `DottedPath`: a validated path such as `model.submodel.method`
//! - `Binder`: resolves a path against a root table and binds the function
//!   to its owner (or an explicit target), currying extra arguments
//! - `BoundCallable`: the resulting function + receiver + arguments package
//! - `HelperExpr`: the `(bind path args... target=value)` expression form
//! - a Lua runtime exposing `bind()` to scripts
//!
//! Objects are Lua tables and the receiver is passed as the function's first
//! argument (`self`).

pub mod bind;
pub mod config;
pub mod consts;
pub mod helper;
pub mod lua;
pub mod path;
pub mod resolve;
pub mod util;

pub use bind::{BindError, Binder, BoundCallable, bind};
pub use config::BindConfig;
pub use path::{DottedPath, InvalidPathError};
pub use resolve::{Callee, Resolution, UnresolvedPathError};
