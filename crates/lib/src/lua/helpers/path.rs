use mlua::Lua;
use mlua::prelude::*;

use crate::path::{ParsedPath, PathEngine, PathError, PathStyle};

/// Create the `pathos.path` table bound to `engine`, with `posix` and `win32`
/// sub-tables for the explicit grammars.
pub fn create_path_helpers(lua: &Lua, engine: &PathEngine) -> LuaResult<LuaTable> {
  let path = create_grammar_table(lua, engine.clone())?;
  path.set("posix", create_grammar_table(lua, rebind(engine, PathStyle::Posix)?)?)?;
  path.set("win32", create_grammar_table(lua, rebind(engine, PathStyle::Windows)?)?)?;
  Ok(path)
}

/// Bind `style` to the engine's cwd, or to the grammar root when the cwd is
/// not absolute in that grammar.
fn rebind(engine: &PathEngine, style: PathStyle) -> LuaResult<PathEngine> {
  let cwd = if style.grammar().is_absolute(engine.cwd()) {
    engine.cwd()
  } else if style == PathStyle::Windows {
    r"C:\"
  } else {
    "/"
  };
  PathEngine::new(style, cwd).map_err(LuaError::external)
}

/// Short description of a Lua value for argument errors.
fn describe(value: &LuaValue) -> String {
  match value {
    LuaValue::Nil => "nil".to_string(),
    LuaValue::Boolean(b) => format!("boolean ({b})"),
    LuaValue::Integer(i) => format!("number ({i})"),
    LuaValue::Number(n) => format!("number ({n})"),
    other => other.type_name().to_string(),
  }
}

/// Require a string argument, raising `InvalidArgument` otherwise.
fn string_arg(name: &str, value: &LuaValue) -> LuaResult<String> {
  match value {
    LuaValue::String(s) => Ok(s.to_string_lossy()),
    other => Err(LuaError::external(PathError::expected_string(name, describe(other)))),
  }
}

fn string_args(name: &str, values: &LuaMultiValue) -> LuaResult<Vec<String>> {
  values
    .iter()
    .enumerate()
    .map(|(i, value)| string_arg(&format!("{name}[{i}]"), value))
    .collect()
}

/// Field of a path object: strings as-is, numbers in their Lua form,
/// anything else empty.
fn field(lua: &Lua, table: &LuaTable, key: &str) -> LuaResult<String> {
  let value: LuaValue = table.get(key)?;
  match value {
    LuaValue::String(s) => Ok(s.to_string_lossy()),
    LuaValue::Integer(_) | LuaValue::Number(_) => Ok(
      lua
        .coerce_string(value)?
        .map(|s| s.to_string_lossy())
        .unwrap_or_default(),
    ),
    _ => Ok(String::new()),
  }
}

fn parsed_to_table(lua: &Lua, parsed: &ParsedPath) -> LuaResult<LuaTable> {
  let table = lua.create_table()?;
  table.set("root", parsed.root.as_str())?;
  table.set("dir", parsed.dir.as_str())?;
  table.set("base", parsed.base.as_str())?;
  table.set("name", parsed.name.as_str())?;
  table.set("ext", parsed.ext.as_str())?;
  Ok(table)
}

fn create_grammar_table(lua: &Lua, engine: PathEngine) -> LuaResult<LuaTable> {
  let path = lua.create_table()?;

  path.set("sep", engine.sep().to_string())?;
  path.set("delimiter", engine.delimiter().to_string())?;

  let e = engine.clone();
  path.set(
    "basename",
    lua.create_function(move |_, (path, suffix): (LuaValue, LuaValue)| {
      let path = string_arg("path", &path)?;
      let suffix = match suffix {
        LuaValue::Nil => None,
        other => Some(string_arg("suffix", &other)?),
      };
      Ok(e.basename(&path, suffix.as_deref()))
    })?,
  )?;

  let e = engine.clone();
  path.set(
    "dirname",
    lua.create_function(move |_, path: LuaValue| Ok(e.dirname(&string_arg("path", &path)?)))?,
  )?;

  let e = engine.clone();
  path.set(
    "extname",
    lua.create_function(move |_, path: LuaValue| Ok(e.extname(&string_arg("path", &path)?)))?,
  )?;

  let e = engine.clone();
  path.set(
    "is_absolute",
    lua.create_function(move |_, path: LuaValue| Ok(e.is_absolute(&string_arg("path", &path)?)))?,
  )?;

  let e = engine.clone();
  path.set(
    "normalize",
    lua.create_function(move |_, path: LuaValue| Ok(e.normalize(&string_arg("path", &path)?)))?,
  )?;

  let e = engine.clone();
  path.set(
    "join",
    lua.create_function(move |_, segments: LuaMultiValue| {
      let segments = string_args("path", &segments)?;
      let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
      Ok(e.join(&segments))
    })?,
  )?;

  let e = engine.clone();
  path.set(
    "resolve",
    lua.create_function(move |_, segments: LuaMultiValue| {
      let segments = string_args("paths", &segments)?;
      let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
      Ok(e.resolve(&segments))
    })?,
  )?;

  let e = engine.clone();
  path.set(
    "relative",
    lua.create_function(move |_, (from, to): (LuaValue, LuaValue)| {
      let from = string_arg("from", &from)?;
      let to = string_arg("to", &to)?;
      Ok(e.relative(&from, &to))
    })?,
  )?;

  let e = engine.clone();
  path.set(
    "parse",
    lua.create_function(move |lua, path: LuaValue| {
      let parsed = e.parse(&string_arg("path", &path)?);
      parsed_to_table(lua, &parsed)
    })?,
  )?;

  let e = engine.clone();
  path.set(
    "format",
    lua.create_function(move |lua, object: LuaValue| {
      let LuaValue::Table(table) = object else {
        return Err(LuaError::external(PathError::InvalidArgument {
          name: "pathObject".to_string(),
          expected: "table",
          received: describe(&object),
        }));
      };
      let parsed = ParsedPath {
        root: field(lua, &table, "root")?,
        dir: field(lua, &table, "dir")?,
        base: field(lua, &table, "base")?,
        name: field(lua, &table, "name")?,
        ext: field(lua, &table, "ext")?,
      };
      Ok(e.format(&parsed))
    })?,
  )?;

  let e = engine.clone();
  path.set(
    "split_list",
    lua.create_function(move |_, list: LuaValue| {
      let list = string_arg("list", &list)?;
      Ok(e.split_list(&list).into_iter().map(str::to_string).collect::<Vec<_>>())
    })?,
  )?;

  path.set(
    "to_namespaced_path",
    lua.create_function(move |lua, path: LuaValue| match path {
      LuaValue::String(s) => lua
        .create_string(engine.to_namespaced_path(&s.to_string_lossy()))
        .map(LuaValue::String),
      other => Ok(other),
    })?,
  )?;

  Ok(path)
}
