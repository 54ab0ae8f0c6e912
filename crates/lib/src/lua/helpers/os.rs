use mlua::Lua;
use mlua::prelude::*;

use crate::platform::{UserInfo, info};

fn user_to_table(lua: &Lua, user: &UserInfo) -> LuaResult<LuaTable> {
  let table = lua.create_table()?;
  table.set("username", user.username.as_str())?;
  table.set("uid", user.uid)?;
  table.set("gid", user.gid)?;
  table.set("shell", user.shell.as_deref())?;
  table.set("homedir", user.homedir.as_str())?;
  Ok(table)
}

/// Create the `pathos.os` table of read-only host queries.
pub fn create_os_helpers(lua: &Lua) -> LuaResult<LuaTable> {
  let os = lua.create_table()?;

  os.set("eol", lua.create_function(|_, ()| Ok(info::eol()))?)?;
  os.set("dev_null", lua.create_function(|_, ()| Ok(info::dev_null()))?)?;
  os.set("endianness", lua.create_function(|_, ()| Ok(info::endianness()))?)?;
  os.set("platform", lua.create_function(|_, ()| Ok(info::platform()))?)?;
  os.set("arch", lua.create_function(|_, ()| Ok(info::arch()))?)?;
  os.set(
    "available_parallelism",
    lua.create_function(|_, ()| Ok(info::available_parallelism()))?,
  )?;
  os.set("home_dir", lua.create_function(|_, ()| Ok(info::home_dir()))?)?;
  os.set("tmp_dir", lua.create_function(|_, ()| Ok(info::tmp_dir()))?)?;
  os.set("hostname", lua.create_function(|_, ()| Ok(info::hostname()))?)?;
  os.set("os_type", lua.create_function(|_, ()| Ok(info::os_type()))?)?;
  os.set("release", lua.create_function(|_, ()| Ok(info::release()))?)?;
  os.set("version", lua.create_function(|_, ()| Ok(info::version()))?)?;
  os.set("machine", lua.create_function(|_, ()| Ok(info::machine()))?)?;
  os.set("uptime", lua.create_function(|_, ()| Ok(info::uptime()))?)?;
  os.set(
    "user_info",
    lua.create_function(|lua, ()| user_to_table(lua, &info::user_info()))?,
  )?;

  Ok(os)
}
