//! Lua runtime and context loading.
//!
//! This module provides the Lua environment contexts are evaluated in. It
//! creates the VM, registers the `bind` global and the `pathbind` table, and
//! loads context files.
//!
//! # Submodules
//!
//! - [`convert`] - Lua value to JSON conversion for reporting results
//! - [`globals`] - Global Lua functions (`bind()`) and the `pathbind` table
//! - [`runtime`] - Lua VM creation and file loading

pub mod convert;
pub mod globals;
pub mod runtime;
