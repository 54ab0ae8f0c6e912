//! Shared helpers for library integration tests.

use mlua::prelude::*;
use pathos_lib::config::Config;
use pathos_lib::lua::runtime::create_runtime;
use pathos_lib::path::PathStyle;

/// Runtime whose `pathos.path` speaks POSIX with cwd `/home/user`.
pub fn posix_runtime() -> LuaResult<Lua> {
  runtime(PathStyle::Posix, "/home/user")
}

/// Runtime whose `pathos.path` speaks Windows with cwd `C:\Users\user`.
pub fn windows_runtime() -> LuaResult<Lua> {
  runtime(PathStyle::Windows, r"C:\Users\user")
}

pub fn runtime(style: PathStyle, cwd: &str) -> LuaResult<Lua> {
  create_runtime(&Config {
    style,
    cwd: Some(cwd.to_string()),
  })
}

/// Evaluate a Lua expression and return it as a string.
pub fn eval_string(lua: &Lua, expr: &str) -> LuaResult<String> {
  lua.load(format!("return {expr}")).eval()
}
