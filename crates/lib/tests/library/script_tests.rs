//! Tests for loading script files.

use mlua::prelude::*;
use pathos_lib::lua::runtime::load_file;
use pathos_lib::path::PathStyle;
use tempfile::TempDir;

use super::common::{eval_string, runtime};

#[test]
fn script_sees_its_own_directory() -> LuaResult<()> {
  let temp = TempDir::new().map_err(LuaError::external)?;
  let script = temp.path().join("main.lua");
  std::fs::write(&script, "return pathos.dir").map_err(LuaError::external)?;

  let lua = runtime(PathStyle::Native, if cfg!(windows) { r"C:\" } else { "/" })?;
  let value: String = lua.unpack(load_file(&lua, &script)?)?;
  let expected = temp.path().canonicalize().map_err(LuaError::external)?;
  assert_eq!(value, expected.to_string_lossy());
  Ok(())
}

#[test]
fn argument_errors_surface_from_scripts() -> LuaResult<()> {
  let temp = TempDir::new().map_err(LuaError::external)?;
  let script = temp.path().join("broken.lua");
  std::fs::write(&script, "return pathos.path.dirname(true)").map_err(LuaError::external)?;

  let lua = runtime(PathStyle::Posix, "/")?;
  let err = load_file(&lua, &script).unwrap_err().to_string();
  assert!(err.contains("must be of type string"), "{err}");
  Ok(())
}

#[test]
fn version_is_exposed() -> LuaResult<()> {
  let lua = runtime(PathStyle::Posix, "/")?;
  assert_eq!(eval_string(&lua, "pathos.version")?, env!("CARGO_PKG_VERSION"));
  Ok(())
}
