//! Library integration tests driving the Lua bindings.

mod common;
mod os_tests;
mod path_tests;
mod script_tests;
