//! Lexical path manipulation in POSIX and Windows grammars.
//!
//! Nothing here touches the filesystem. Operations that need a working
//! directory (`resolve`, `relative`, `to_namespaced_path`) take it as an
//! argument, and [`PathEngine`] carries one supplied by its caller.
//!
//! - [`Posix`] and [`Windows`] implement the [`PathGrammar`] trait side by side
//! - [`PathStyle`] picks a grammar explicitly, or the host's via `Native`
//! - [`PathEngine`] binds a grammar to a working directory

mod common;
mod error;
mod parsed;
pub mod posix;
pub mod windows;

#[cfg(test)]
mod proptests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use error::PathError;
pub use parsed::ParsedPath;
pub use posix::Posix;
pub use windows::Windows;

/// Operations every path grammar provides.
pub trait PathGrammar: fmt::Debug + Send + Sync {
  /// Segment separator emitted on output.
  fn sep(&self) -> char;

  /// Delimiter between entries of a `PATH`-style list.
  fn delimiter(&self) -> char;

  /// Final segment of `path`, with `suffix` removed when it matches exactly.
  fn basename(&self, path: &str, suffix: Option<&str>) -> String;

  /// Everything before the final segment, `.` when there is nothing.
  fn dirname(&self, path: &str) -> String;

  /// Extension of the final segment including its dot, or `""`.
  fn extname(&self, path: &str) -> String;

  /// Assemble a path from its parts.
  fn format(&self, parsed: &ParsedPath) -> String;

  /// Split a path into its parts.
  fn parse(&self, path: &str) -> ParsedPath;

  fn is_absolute(&self, path: &str) -> bool;

  /// Join non-empty segments with the separator and normalize the result.
  fn join(&self, segments: &[&str]) -> String;

  /// Collapse separators and resolve `.` and `..` lexically.
  fn normalize(&self, path: &str) -> String;

  /// Relative route from `from` to `to`, both resolved against `cwd`.
  fn relative(&self, from: &str, to: &str, cwd: &str) -> String;

  /// Resolve segments right to left into an absolute path, falling back to
  /// `cwd` when none of them is absolute.
  ///
  /// `cwd` should be absolute. A relative one is read as if it started at
  /// the grammar's root, so the result is absolute either way.
  fn resolve(&self, segments: &[&str], cwd: &str) -> String;

  /// Namespace-prefixed form of `path`. Only meaningful on Windows.
  fn to_namespaced_path(&self, path: &str, cwd: &str) -> String;
}

/// Which grammar a [`PathEngine`] speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
  Posix,
  Windows,
  /// Whichever grammar matches the compilation target.
  #[default]
  Native,
}

impl PathStyle {
  /// Collapse `Native` into the concrete style of the compilation target.
  pub const fn concrete(self) -> Self {
    match self {
      Self::Native => {
        if cfg!(windows) {
          Self::Windows
        } else {
          Self::Posix
        }
      }
      other => other,
    }
  }

  /// The grammar implementing this style.
  pub fn grammar(self) -> &'static dyn PathGrammar {
    match self.concrete() {
      Self::Windows => &Windows,
      _ => &Posix,
    }
  }

  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Posix => "posix",
      Self::Windows => "windows",
      Self::Native => "native",
    }
  }
}

impl fmt::Display for PathStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for PathStyle {
  type Err = PathError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "posix" => Ok(Self::Posix),
      "windows" | "win32" => Ok(Self::Windows),
      "native" => Ok(Self::Native),
      _ => Err(PathError::UnknownStyle(s.to_string())),
    }
  }
}

/// A grammar bound to a working directory.
///
/// ```
/// use pathos_lib::path::{PathEngine, PathStyle};
///
/// let engine = PathEngine::new(PathStyle::Posix, "/srv/app").unwrap();
/// assert_eq!(engine.resolve(&["static", "../index.html"]), "/srv/app/index.html");
/// assert_eq!(engine.relative("/srv/app", "/srv/app/static/a.css"), "static/a.css");
/// ```
#[derive(Debug, Clone)]
pub struct PathEngine {
  style: PathStyle,
  grammar: &'static dyn PathGrammar,
  cwd: String,
}

impl PathEngine {
  /// Bind `style` to `cwd`, which must be absolute in that grammar.
  pub fn new(style: PathStyle, cwd: impl Into<String>) -> Result<Self, PathError> {
    let cwd = cwd.into();
    let grammar = style.grammar();
    if !grammar.is_absolute(&cwd) {
      return Err(PathError::RelativeCwd {
        cwd,
        style: style.concrete().as_str(),
      });
    }
    trace!(style = %style, cwd = %cwd, "bound path engine");
    Ok(Self { style, grammar, cwd })
  }

  pub fn style(&self) -> PathStyle {
    self.style
  }

  pub fn cwd(&self) -> &str {
    &self.cwd
  }

  pub fn grammar(&self) -> &'static dyn PathGrammar {
    self.grammar
  }

  pub fn sep(&self) -> char {
    self.grammar.sep()
  }

  pub fn delimiter(&self) -> char {
    self.grammar.delimiter()
  }

  pub fn basename(&self, path: &str, suffix: Option<&str>) -> String {
    self.grammar.basename(path, suffix)
  }

  pub fn dirname(&self, path: &str) -> String {
    self.grammar.dirname(path)
  }

  pub fn extname(&self, path: &str) -> String {
    self.grammar.extname(path)
  }

  pub fn format(&self, parsed: &ParsedPath) -> String {
    self.grammar.format(parsed)
  }

  pub fn parse(&self, path: &str) -> ParsedPath {
    self.grammar.parse(path)
  }

  pub fn is_absolute(&self, path: &str) -> bool {
    self.grammar.is_absolute(path)
  }

  pub fn join(&self, segments: &[&str]) -> String {
    self.grammar.join(segments)
  }

  pub fn normalize(&self, path: &str) -> String {
    self.grammar.normalize(path)
  }

  pub fn relative(&self, from: &str, to: &str) -> String {
    self.grammar.relative(from, to, &self.cwd)
  }

  pub fn resolve(&self, segments: &[&str]) -> String {
    self.grammar.resolve(segments, &self.cwd)
  }

  pub fn to_namespaced_path(&self, path: &str) -> String {
    self.grammar.to_namespaced_path(path, &self.cwd)
  }

  /// Split a `PATH`-style list on this grammar's delimiter, dropping empty
  /// entries.
  pub fn split_list<'a>(&self, list: &'a str) -> Vec<&'a str> {
    list.split(self.delimiter()).filter(|entry| !entry.is_empty()).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn style_parses_aliases() {
    assert_eq!("posix".parse::<PathStyle>().unwrap(), PathStyle::Posix);
    assert_eq!("Win32".parse::<PathStyle>().unwrap(), PathStyle::Windows);
    assert_eq!(" native ".parse::<PathStyle>().unwrap(), PathStyle::Native);
    assert!(matches!("dos".parse::<PathStyle>(), Err(PathError::UnknownStyle(_))));
  }

  #[test]
  fn native_style_matches_target() {
    let expected = if cfg!(windows) { '\\' } else { '/' };
    assert_eq!(PathStyle::Native.grammar().sep(), expected);
    assert_ne!(PathStyle::Native.concrete(), PathStyle::Native);
  }

  #[test]
  fn grammar_constants() {
    assert_eq!(Posix.sep(), '/');
    assert_eq!(Posix.delimiter(), ':');
    assert_eq!(Windows.sep(), '\\');
    assert_eq!(Windows.delimiter(), ';');
  }

  #[test]
  fn engine_rejects_relative_cwd() {
    let err = PathEngine::new(PathStyle::Posix, "relative/dir").unwrap_err();
    assert!(matches!(err, PathError::RelativeCwd { .. }));
    assert!(PathEngine::new(PathStyle::Windows, "/srv").is_ok());
    assert!(PathEngine::new(PathStyle::Windows, "C:relative").is_err());
  }

  #[test]
  fn engine_delegates_to_grammar() {
    let engine = PathEngine::new(PathStyle::Windows, r"D:\work").unwrap();
    assert_eq!(engine.resolve(&["src"]), r"D:\work\src");
    assert_eq!(engine.join(&["a", "b"]), r"a\b");
    assert_eq!(engine.style(), PathStyle::Windows);
    assert_eq!(engine.cwd(), r"D:\work");
  }

  #[test]
  fn split_list_uses_delimiter() {
    let engine = PathEngine::new(PathStyle::Posix, "/").unwrap();
    assert_eq!(engine.split_list("/usr/bin::/bin"), vec!["/usr/bin", "/bin"]);

    let engine = PathEngine::new(PathStyle::Windows, r"C:\").unwrap();
    assert_eq!(engine.split_list(r"C:\Windows;C:\Tools"), vec![r"C:\Windows", r"C:\Tools"]);
  }
}
