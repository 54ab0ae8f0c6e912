use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::IsSep;

/// Structured decomposition of a path string.
///
/// Produced by `parse` and consumed by `format`. Every field defaults to the
/// empty string, so a partially filled value is always valid input to
/// `format`.
///
/// ```
/// use pathos_lib::path::{ParsedPath, PathGrammar, Posix};
///
/// let parsed = Posix.parse("/home/user/dir/file.txt");
/// assert_eq!(parsed.root, "/");
/// assert_eq!(parsed.dir, "/home/user/dir");
/// assert_eq!(parsed.base, "file.txt");
/// assert_eq!(parsed.name, "file");
/// assert_eq!(parsed.ext, ".txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedPath {
  /// Drive, UNC or leading-separator portion, empty for relative paths.
  pub root: String,
  /// Directory portion without its trailing separator, unless it is the root.
  pub dir: String,
  /// Final segment.
  pub base: String,
  /// `base` without its extension.
  pub name: String,
  /// Extension including the leading dot, or empty.
  pub ext: String,
}

impl ParsedPath {
  /// Build a value from a directory and a final segment, deriving `name`
  /// and `ext` from `base`.
  pub fn from_dir_base(dir: impl Into<String>, base: impl Into<String>) -> Self {
    let base = base.into();
    let (name, ext) = super::common::split_extension(&base);
    Self {
      root: String::new(),
      dir: dir.into(),
      name: name.to_string(),
      ext: ext.to_string(),
      base,
    }
  }

  /// Build a value from a root, a stem and an extension. `base` is left
  /// empty so `format` assembles it.
  pub fn from_name_ext(root: impl Into<String>, name: impl Into<String>, ext: impl Into<String>) -> Self {
    Self {
      root: root.into(),
      name: name.into(),
      ext: ext.into(),
      ..Self::default()
    }
  }
}

impl fmt::Display for ParsedPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{{ root: {:?}, dir: {:?}, base: {:?}, ext: {:?}, name: {:?} }}",
      self.root, self.dir, self.base, self.ext, self.name
    )
  }
}

/// Assemble a path string from its parts.
pub(crate) fn format_with(separator: char, is_sep: IsSep, parsed: &ParsedPath) -> String {
  let dir = if parsed.dir.is_empty() { &parsed.root } else { &parsed.dir };

  let base = if parsed.base.is_empty() {
    let mut base = parsed.name.clone();
    if !parsed.ext.is_empty() {
      if !parsed.ext.starts_with('.') {
        base.push('.');
      }
      base.push_str(&parsed.ext);
    }
    base
  } else {
    parsed.base.clone()
  };

  if dir.is_empty() {
    return base;
  }

  let mut out = String::with_capacity(dir.len() + 1 + base.len());
  out.push_str(dir);
  let ends_in_sep = dir.as_bytes().last().is_some_and(|b| is_sep(*b));
  if *dir != parsed.root && !ends_in_sep {
    out.push(separator);
  }
  out.push_str(&base);
  out
}
