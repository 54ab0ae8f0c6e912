//! Tests for pathos.os.* functions.

use mlua::prelude::*;

use super::common::{eval_string, posix_runtime};

#[test]
fn queries_return_values() -> LuaResult<()> {
  let lua = posix_runtime()?;
  let ok: bool = lua
    .load(
      r#"
      local os = pathos.os
      assert(type(os.hostname()) == "string")
      assert(type(os.os_type()) == "string")
      assert(type(os.release()) == "string")
      assert(type(os.version()) == "string")
      assert(type(os.machine()) == "string")
      assert(type(os.home_dir()) == "string")
      assert(type(os.tmp_dir()) == "string" and #os.tmp_dir() > 0)
      assert(math.type(os.uptime()) == "integer")
      assert(os.available_parallelism() >= 1)
      assert(os.endianness() == "LE" or os.endianness() == "BE")
      return true
      "#,
    )
    .eval()?;
  assert!(ok);
  Ok(())
}

#[test]
fn eol_and_dev_null_follow_target() -> LuaResult<()> {
  let lua = posix_runtime()?;
  let eol = eval_string(&lua, "pathos.os.eol()")?;
  let dev_null = eval_string(&lua, "pathos.os.dev_null()")?;
  if cfg!(windows) {
    assert_eq!(eol, "\r\n");
    assert_eq!(dev_null, r"\\.\nul");
  } else {
    assert_eq!(eol, "\n");
    assert_eq!(dev_null, "/dev/null");
  }
  Ok(())
}

#[test]
fn user_info_table() -> LuaResult<()> {
  let lua = posix_runtime()?;
  let user: LuaTable = lua.load("return pathos.os.user_info()").eval()?;
  assert!(!user.get::<String>("username")?.is_empty());
  let uid: i64 = user.get("uid")?;
  if cfg!(unix) {
    assert!(uid >= 0);
  } else {
    assert_eq!(uid, -1);
  }
  Ok(())
}

#[test]
fn excluded_queries_are_absent() -> LuaResult<()> {
  let lua = posix_runtime()?;
  let absent: bool = lua
    .load("return pathos.os.cpus == nil and pathos.os.network_interfaces == nil and pathos.os.set_priority == nil")
    .eval()?;
  assert!(absent);
  Ok(())
}
