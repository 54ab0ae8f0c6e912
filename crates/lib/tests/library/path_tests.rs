//! Tests for pathos.path.* functions.

use mlua::prelude::*;

use super::common::{eval_string, posix_runtime, windows_runtime};

mod posix {
  use super::*;

  #[test]
  fn join_and_normalize() -> LuaResult<()> {
    let lua = posix_runtime()?;
    assert_eq!(eval_string(&lua, r#"pathos.path.join("/foo", "bar")"#)?, "/foo/bar");
    assert_eq!(
      eval_string(&lua, r#"pathos.path.normalize("/foo/bar//baz/asdf/quux/..")"#)?,
      "/foo/bar/baz/asdf"
    );
    assert_eq!(eval_string(&lua, "pathos.path.join()")?, ".");
    Ok(())
  }

  #[test]
  fn extname_leading_dots_belong_to_stem() -> LuaResult<()> {
    let lua = posix_runtime()?;
    let cases = [
      ("index.coffee.md", ".md"),
      ("index", ""),
      (".index", ""),
      (".index.md", ".md"),
      ("..rc", ""),
      ("index.", "."),
    ];
    for (input, expected) in cases {
      let actual = eval_string(&lua, &format!("pathos.path.extname({input:?})"))?;
      assert_eq!(actual, expected, "extname({input})");
    }
    Ok(())
  }

  #[test]
  fn is_absolute() -> LuaResult<()> {
    let lua = posix_runtime()?;
    let results: (bool, bool, bool) = lua
      .load(r#"return pathos.path.is_absolute("/foo/bar"), pathos.path.is_absolute("bar/baz"), pathos.path.is_absolute("")"#)
      .eval()?;
    assert_eq!(results, (true, false, false));
    Ok(())
  }

  #[test]
  fn relative_and_resolve() -> LuaResult<()> {
    let lua = posix_runtime()?;
    assert_eq!(
      eval_string(
        &lua,
        r#"pathos.path.relative("/home/user/project", "/home/user/project/subfolder/file.txt")"#
      )?,
      "subfolder/file.txt"
    );
    assert_eq!(eval_string(&lua, r#"pathos.path.resolve("/foo/bar", "./baz")"#)?, "/foo/bar/baz");
    assert_eq!(eval_string(&lua, r#"pathos.path.resolve("docs")"#)?, "/home/user/docs");
    assert_eq!(eval_string(&lua, r#"pathos.path.relative("docs", "docs")"#)?, "");
    Ok(())
  }

  #[test]
  fn format_inserts_dot_and_prefers_dir() -> LuaResult<()> {
    let lua = posix_runtime()?;
    assert_eq!(
      eval_string(&lua, r#"pathos.path.format({ root = "/", name = "file", ext = "txt" })"#)?,
      "/file.txt"
    );
    assert_eq!(
      eval_string(
        &lua,
        r#"pathos.path.format({ dir = "/home/user/dir", root = "/ignored", base = "file.txt" })"#
      )?,
      "/home/user/dir/file.txt"
    );
    Ok(())
  }

  #[test]
  fn parse_then_format_round_trips() -> LuaResult<()> {
    let lua = posix_runtime()?;
    let ok: bool = lua
      .load(
        r#"
        local p = pathos.path
        for _, input in ipairs({ "/home/user/dir/file.txt", "./a/b.c", "/", "file", "..rc" }) do
          local parsed = p.parse(input)
          local again = p.parse(p.format(parsed))
          for _, key in ipairs({ "root", "dir", "base", "name", "ext" }) do
            if parsed[key] ~= again[key] then
              error(input .. ": " .. key .. " changed")
            end
          end
        end
        return true
        "#,
      )
      .eval()?;
    assert!(ok);
    Ok(())
  }
}

mod win32 {
  use super::*;

  #[test]
  fn basename_suffix_is_case_sensitive() -> LuaResult<()> {
    let lua = windows_runtime()?;
    assert_eq!(eval_string(&lua, r#"pathos.path.basename("C:\\foo.html", ".html")"#)?, "foo");
    assert_eq!(eval_string(&lua, r#"pathos.path.basename("C:\\foo.HTML", ".html")"#)?, "foo.HTML");
    Ok(())
  }

  #[test]
  fn normalize_emits_backslashes() -> LuaResult<()> {
    let lua = windows_runtime()?;
    assert_eq!(
      eval_string(&lua, r#"pathos.path.normalize("C:\\temp\\\\foo\\bar\\..\\")"#)?,
      r"C:\temp\foo\"
    );
    assert_eq!(
      eval_string(&lua, r#"pathos.path.normalize("C:////temp\\\\/\\/\\/foo/bar")"#)?,
      r"C:\temp\foo\bar"
    );
    Ok(())
  }

  #[test]
  fn resolve_uses_configured_cwd() -> LuaResult<()> {
    let lua = windows_runtime()?;
    assert_eq!(eval_string(&lua, r#"pathos.path.resolve("Desktop")"#)?, r"C:\Users\user\Desktop");
    assert_eq!(eval_string(&lua, r#"pathos.path.resolve("D:\\data", "x")"#)?, r"D:\data\x");
    Ok(())
  }

  #[test]
  fn relative_ignores_case() -> LuaResult<()> {
    let lua = windows_runtime()?;
    assert_eq!(
      eval_string(&lua, r#"pathos.path.relative("C:\\Orandea\\test\\aaa", "c:\\orandea\\impl\\bbb")"#)?,
      r"..\..\impl\bbb"
    );
    Ok(())
  }

  #[test]
  fn parse_unc_root() -> LuaResult<()> {
    let lua = windows_runtime()?;
    assert_eq!(
      eval_string(&lua, r#"pathos.path.parse("\\\\server\\share\\dir\\file.txt").root"#)?,
      r"\\server\share\"
    );
    Ok(())
  }

  #[test]
  fn namespaced_unc_path() -> LuaResult<()> {
    let lua = windows_runtime()?;
    assert_eq!(
      eval_string(&lua, r#"pathos.path.to_namespaced_path("\\\\server\\share\\file.txt")"#)?,
      r"\\?\UNC\server\share\file.txt"
    );
    Ok(())
  }
}

mod argument_checking {
  use super::*;

  #[test]
  fn non_string_paths_raise_errors() -> LuaResult<()> {
    let lua = posix_runtime()?;
    for call in [
      "pathos.path.basename(nil)",
      "pathos.path.dirname({})",
      "pathos.path.extname(false)",
      "pathos.path.normalize(1)",
      "pathos.path.is_absolute()",
      r#"pathos.path.relative("/a", 2)"#,
      r#"pathos.path.resolve("/a", {})"#,
      "pathos.path.parse(3.5)",
    ] {
      let result = lua.load(format!("return {call}")).exec();
      let err = match result {
        Ok(()) => panic!("{call} should have failed"),
        Err(err) => err.to_string(),
      };
      assert!(err.contains("must be of type string"), "{call}: {err}");
    }
    Ok(())
  }

  #[test]
  fn explicit_grammars_are_always_available() -> LuaResult<()> {
    let lua = windows_runtime()?;
    assert_eq!(eval_string(&lua, r#"pathos.path.posix.join("a", "b")"#)?, "a/b");
    assert_eq!(eval_string(&lua, r#"pathos.path.win32.join("a", "b")"#)?, r"a\b");
    Ok(())
  }
}
