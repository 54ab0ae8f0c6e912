//! Guided walkthrough of every path operation.
//!
//! Each section runs the same operation through both grammars so the
//! differences are visible side by side, then the host report follows.

use std::fmt::Display;

use anyhow::Result;
use pathos_lib::path::{ParsedPath, PathEngine, PathStyle};
use pathos_lib::platform::PlatformInfo;

use super::os::print_report;
use crate::output::{print_header, symbols};

fn show(call: &str, result: impl Display) {
  println!("  {call} {} {result}", symbols::ARROW);
}

fn quoted(result: &str) -> String {
  format!("{result:?}")
}

pub fn cmd_tour() -> Result<()> {
  let posix = PathEngine::new(PathStyle::Posix, "/home/user")?;
  let win = PathEngine::new(PathStyle::Windows, r"C:\Users\user")?;

  print_header("Separators");
  show("posix.sep", quoted(&posix.sep().to_string()));
  show("posix.delimiter", quoted(&posix.delimiter().to_string()));
  show("win32.sep", quoted(&win.sep().to_string()));
  show("win32.delimiter", quoted(&win.delimiter().to_string()));

  print_header("basename");
  show(
    r#"posix.basename("/foo/bar/baz/asdf/quux.html")"#,
    quoted(&posix.basename("/foo/bar/baz/asdf/quux.html", None)),
  );
  show(
    r#"win32.basename("C:\foo.html", ".html")"#,
    quoted(&win.basename(r"C:\foo.html", Some(".html"))),
  );
  show(
    r#"win32.basename("C:\foo.HTML", ".html")"#,
    quoted(&win.basename(r"C:\foo.HTML", Some(".html"))),
  );

  print_header("dirname");
  show(
    r#"posix.dirname("/foo/bar/baz/asdf/quux")"#,
    quoted(&posix.dirname("/foo/bar/baz/asdf/quux")),
  );
  show(r#"win32.dirname("C:\foo\bar")"#, quoted(&win.dirname(r"C:\foo\bar")));

  print_header("extname");
  for input in ["index.html", "index.coffee.md", "index.", "index", ".index", ".index.md", "..rc"] {
    show(&format!("posix.extname({input:?})"), quoted(&posix.extname(input)));
  }

  print_header("format");
  let with_dir = ParsedPath {
    root: "/ignored".to_string(),
    dir: "/home/user/dir".to_string(),
    base: "file.txt".to_string(),
    ..ParsedPath::default()
  };
  show(
    r#"posix.format({ root = "/ignored", dir = "/home/user/dir", base = "file.txt" })"#,
    quoted(&posix.format(&with_dir)),
  );
  let with_ext = ParsedPath::from_name_ext("/", "file", "txt");
  show(
    r#"posix.format({ root = "/", name = "file", ext = "txt" })"#,
    quoted(&posix.format(&with_ext)),
  );
  let windows_parts = ParsedPath::from_dir_base(r"C:\path\dir", "file.txt");
  show(
    r#"win32.format({ dir = "C:\path\dir", base = "file.txt" })"#,
    quoted(&win.format(&windows_parts)),
  );

  print_header("parse");
  show(
    r#"posix.parse("/home/user/dir/file.txt")"#,
    posix.parse("/home/user/dir/file.txt"),
  );
  show(
    r#"win32.parse("C:\path\dir\file.txt")"#,
    win.parse(r"C:\path\dir\file.txt"),
  );

  print_header("is_absolute");
  for input in ["/foo/bar", "/baz/..", "qux/", "."] {
    show(&format!("posix.is_absolute({input:?})"), posix.is_absolute(input));
  }
  for input in [r"//server", r"\\server", "C:/foo/..", r"C:\foo\..", r"bar\baz", "bar/baz", "."] {
    show(&format!("win32.is_absolute({input:?})"), win.is_absolute(input));
  }

  print_header("join");
  show(
    r#"posix.join("/foo", "bar", "baz/asdf", "quux", "..")"#,
    quoted(&posix.join(&["/foo", "bar", "baz/asdf", "quux", ".."])),
  );
  show(r#"win32.join("C:", "foo", "bar")"#, quoted(&win.join(&["C:", "foo", "bar"])));

  print_header("normalize");
  show(
    r#"posix.normalize("/foo/bar//baz/asdf/quux/..")"#,
    quoted(&posix.normalize("/foo/bar//baz/asdf/quux/..")),
  );
  show(
    r#"win32.normalize("C:\temp\\foo\bar\..\")"#,
    quoted(&win.normalize(r"C:\temp\\foo\bar\..\")),
  );
  show(
    r#"win32.normalize("C:////temp\\/\/\/foo/bar")"#,
    quoted(&win.normalize(r"C:////temp\\/\/\/foo/bar")),
  );

  print_header("relative");
  show(
    r#"posix.relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb")"#,
    quoted(&posix.relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb")),
  );
  show(
    r#"win32.relative("C:\orandea\test\aaa", "C:\orandea\impl\bbb")"#,
    quoted(&win.relative(r"C:\orandea\test\aaa", r"C:\orandea\impl\bbb")),
  );

  print_header(&format!("resolve (cwd {} / {})", posix.cwd(), win.cwd()));
  show(r#"posix.resolve("/foo/bar", "./baz")"#, quoted(&posix.resolve(&["/foo/bar", "./baz"])));
  show(r#"posix.resolve("/foo/bar", "/tmp/file/")"#, quoted(&posix.resolve(&["/foo/bar", "/tmp/file/"])));
  show(
    r#"posix.resolve("wwwroot", "static_files/png/", "../gif/image.gif")"#,
    quoted(&posix.resolve(&["wwwroot", "static_files/png/", "../gif/image.gif"])),
  );
  show(r#"win32.resolve("D:\data", "x")"#, quoted(&win.resolve(&[r"D:\data", "x"])));

  print_header("to_namespaced_path");
  show(
    r#"win32.to_namespaced_path("C:\foo\bar")"#,
    quoted(&win.to_namespaced_path(r"C:\foo\bar")),
  );
  show(
    r#"win32.to_namespaced_path("\\server\share\file.txt")"#,
    quoted(&win.to_namespaced_path(r"\\server\share\file.txt")),
  );
  show(r#"posix.to_namespaced_path("/foo")"#, quoted(&posix.to_namespaced_path("/foo")));

  print_header("Host");
  print_report(&PlatformInfo::gather());
  Ok(())
}
