//! Shared utilities.
//!
//! Currently only test helpers shared across modules.
