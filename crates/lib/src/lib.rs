//! pathos-lib: cross-platform path manipulation
//!
//! This crate provides:
//! - `path`: POSIX and Windows path grammars behind one trait, and a facade
//!   bound to an explicit grammar and working directory
//! - `platform`: read-only host queries that degrade to defaults on failure
//! - `config`: grammar and working-directory selection from the environment
//! - `lua`: the `pathos` scripting global

pub mod config;
pub mod consts;
pub mod lua;
pub mod path;
pub mod platform;
