//! Lua tables exposed under the `pathos` global.
//!
//! - [`path`] - `pathos.path`, with `posix` and `win32` sub-tables
//! - [`os`] - `pathos.os`, read-only host queries

pub mod os;
pub mod path;
