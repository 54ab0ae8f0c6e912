use std::path::Path;

use mlua::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::consts::APP_NAME;
use crate::lua::globals;

/// Create a new Lua runtime with the `pathos` global registered.
///
/// `require` also searches `./lua/?.lua` and `./lua/?/init.lua`.
pub fn create_runtime(config: &Config) -> LuaResult<Lua> {
  let lua = Lua::new();
  let package = lua.globals().get::<LuaTable>("package")?;
  let package_path = package.get::<String>("path")?;
  package.set("path", format!("./lua/?.lua;./lua/?/init.lua;{}", package_path))?;

  globals::register_globals(&lua, config)?;

  Ok(lua)
}

/// Load and execute a Lua file at the given path.
/// Sets `pathos.dir` to the directory of the loaded file.
/// Returns the result of the file execution.
pub fn load_file(lua: &Lua, path: &Path) -> LuaResult<LuaValue> {
  let canonical_path = path
    .canonicalize()
    .map_err(|e| LuaError::external(format!("cannot canonicalize '{}': {}", path.display(), e)))?;
  let content = std::fs::read_to_string(&canonical_path)
    .map_err(|e| LuaError::external(format!("cannot read '{}': {}", canonical_path.display(), e)))?;

  let dir = canonical_path
    .parent()
    .unwrap_or(Path::new(""))
    .to_string_lossy()
    .into_owned();
  lua.globals().get::<LuaTable>(APP_NAME)?.set("dir", dir.as_str())?;

  debug!(script = %canonical_path.display(), dir = %dir, "evaluating lua script");
  lua
    .load(&content)
    .set_name(format!("@{}", canonical_path.display()))
    .eval::<LuaValue>()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::path::PathStyle;
  use std::io::Write;

  fn config() -> Config {
    Config {
      style: PathStyle::Posix,
      cwd: Some("/work".to_string()),
    }
  }

  #[cfg(unix)]
  #[test]
  fn load_file_sets_dir_and_returns_value() -> LuaResult<()> {
    let dir = tempfile::tempdir().map_err(LuaError::external)?;
    let script = dir.path().join("script.lua");
    let mut file = std::fs::File::create(&script).map_err(LuaError::external)?;
    writeln!(file, "return pathos.path.basename(pathos.dir) .. ':' .. pathos.path.join('a', 'b')")
      .map_err(LuaError::external)?;

    let lua = create_runtime(&config())?;
    let value = load_file(&lua, &script)?;
    let expected_dir = dir
      .path()
      .canonicalize()
      .map_err(LuaError::external)?
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_default();

    let LuaValue::String(result) = value else {
      panic!("expected a string result");
    };
    assert_eq!(result.to_string_lossy(), format!("{expected_dir}:a/b"));
    Ok(())
  }

  #[test]
  fn missing_file_is_an_error() -> LuaResult<()> {
    let lua = create_runtime(&config())?;
    let err = load_file(&lua, Path::new("/definitely/not/here.lua")).unwrap_err();
    assert!(err.to_string().contains("cannot canonicalize"));
    Ok(())
  }
}
