//! Lua scripting surface.
//!
//! Scripts see a single `pathos` global holding the path engine and host
//! queries. Unlike the Rust API, Lua callers can pass any value, so the
//! bindings check argument types and raise descriptive errors.
//!
//! # Submodules
//!
//! - [`globals`] - The `pathos` table
//! - [`helpers`] - `pathos.path` and `pathos.os`
//! - [`runtime`] - VM creation and script loading

pub mod globals;
pub mod helpers;
pub mod runtime;
