//! Global Lua values and the `pathos` table.
//!
//! This module registers the `pathos` global table which provides:
//! - `pathos.version` - Crate version
//! - `pathos.platform` - Platform triple (e.g., "aarch64-darwin")
//! - `pathos.style` - Grammar of `pathos.path` ("posix" or "windows")
//! - `pathos.path` - Path manipulation bound to the configured grammar and cwd
//! - `pathos.os` - Host queries

use mlua::prelude::*;
use tracing::debug;

use super::helpers;
use crate::config::Config;
use crate::consts::APP_NAME;
use crate::platform::platform_triple;

/// Register the `pathos` global table in the Lua runtime.
pub fn register_globals(lua: &Lua, config: &Config) -> LuaResult<()> {
  let engine = config.engine().map_err(LuaError::external)?;
  let pathos = lua.create_table()?;

  pathos.set("version", env!("CARGO_PKG_VERSION"))?;
  pathos.set("platform", platform_triple())?;
  pathos.set("style", engine.style().concrete().as_str())?;

  pathos.set("path", helpers::path::create_path_helpers(lua, &engine)?)?;
  pathos.set("os", helpers::os::create_os_helpers(lua)?)?;

  lua.globals().set(APP_NAME, pathos)?;
  debug!(style = %engine.style(), cwd = engine.cwd(), "registered lua globals");

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::path::PathStyle;

  fn create_test_lua(style: PathStyle, cwd: &str) -> LuaResult<Lua> {
    let lua = Lua::new();
    let config = Config {
      style,
      cwd: Some(cwd.to_string()),
    };
    register_globals(&lua, &config)?;
    Ok(lua)
  }

  #[test]
  fn pathos_global_exists() -> LuaResult<()> {
    let lua = create_test_lua(PathStyle::Posix, "/")?;
    let pathos: LuaTable = lua.globals().get("pathos")?;
    for key in ["version", "platform", "style", "path", "os"] {
      assert!(pathos.contains_key(key)?, "missing pathos.{key}");
    }
    Ok(())
  }

  #[test]
  fn style_reflects_configuration() -> LuaResult<()> {
    let lua = create_test_lua(PathStyle::Windows, r"C:\Users")?;
    let style: String = lua.load("return pathos.style").eval()?;
    let sep: String = lua.load("return pathos.path.sep").eval()?;
    assert_eq!(style, "windows");
    assert_eq!(sep, r"\");
    Ok(())
  }

  #[test]
  fn path_uses_configured_cwd() -> LuaResult<()> {
    let lua = create_test_lua(PathStyle::Posix, "/srv/app")?;
    let resolved: String = lua.load(r#"return pathos.path.resolve("static")"#).eval()?;
    assert_eq!(resolved, "/srv/app/static");
    Ok(())
  }

  #[test]
  fn relative_cwd_fails_registration() {
    let lua = Lua::new();
    let config = Config {
      style: PathStyle::Posix,
      cwd: Some("relative".to_string()),
    };
    let err = register_globals(&lua, &config).unwrap_err();
    assert!(err.to_string().contains("not absolute"), "{err}");
  }

  #[test]
  fn platform_is_valid_triple() -> LuaResult<()> {
    let lua = create_test_lua(PathStyle::Native, if cfg!(windows) { r"C:\" } else { "/" })?;
    let platform: String = lua.load("return pathos.platform").eval()?;
    assert_eq!(platform.split('-').count(), 2, "unexpected triple: {platform}");
    Ok(())
  }
}
