//! Property tests for the parse/format pair and normalization.

use proptest::prelude::*;

use super::{PathGrammar, Posix, Windows};

fn posix_path() -> impl Strategy<Value = String> {
  "/?([a-z.]{0,4}/{1,2}){0,4}[a-z.]{0,5}"
}

fn windows_path() -> impl Strategy<Value = String> {
  r"(C:|[\\/]{1,2})?([a-z.]{0,4}[\\/]{1,2}){0,4}[a-z.]{0,5}"
}

/// Backslash-only Windows paths without empty segments, so no input
/// reads as a UNC root.
fn windows_backslash_path() -> impl Strategy<Value = String> {
  r"(C:|C:\\|\\)?([a-z.]{1,4}\\){0,4}[a-z.]{0,5}"
}

proptest! {
  #[test]
  fn posix_parse_is_stable_under_format(path in posix_path()) {
    let parsed = Posix.parse(&path);
    let reparsed = Posix.parse(&Posix.format(&parsed));
    prop_assert_eq!(parsed, reparsed);
  }

  #[test]
  fn windows_parse_is_stable_under_format(path in windows_path()) {
    let parsed = Windows.parse(&path);
    let reparsed = Windows.parse(&Windows.format(&parsed));
    prop_assert_eq!(parsed, reparsed);
  }

  #[test]
  fn posix_base_is_name_plus_ext(path in posix_path()) {
    let parsed = Posix.parse(&path);
    prop_assert_eq!(format!("{}{}", parsed.name, parsed.ext), parsed.base.clone());
    prop_assert!(!parsed.base.contains('/'));
    prop_assert!(parsed.ext.is_empty() || parsed.ext.starts_with('.'));
    prop_assert_eq!(Posix.extname(&path), parsed.ext);
  }

  #[test]
  fn windows_base_has_no_separator(path in windows_path()) {
    let parsed = Windows.parse(&path);
    prop_assert!(!parsed.base.contains('/') && !parsed.base.contains('\\'));
    prop_assert_eq!(format!("{}{}", parsed.name, parsed.ext), parsed.base);
  }

  #[test]
  fn posix_normalize_is_idempotent(path in posix_path()) {
    let once = Posix.normalize(&path);
    prop_assert_eq!(Posix.normalize(&once), once.clone());
    prop_assert!(!once.contains("//"));
  }

  #[test]
  fn windows_normalize_uses_backslashes(path in windows_path()) {
    let once = Windows.normalize(&path);
    prop_assert!(!once.contains('/'));
    prop_assert_eq!(Windows.normalize(&once), once.clone());
  }

  #[test]
  fn posix_resolve_is_absolute(path in posix_path()) {
    let resolved = Posix.resolve(&[&path], "/cwd");
    prop_assert!(Posix.is_absolute(&resolved));
    prop_assert!(resolved == "/" || !resolved.ends_with('/'));
  }

  #[test]
  fn posix_relative_round_trips(from in posix_path(), to in posix_path()) {
    let rel = Posix.relative(&from, &to, "/cwd");
    let from_abs = Posix.resolve(&[&from], "/cwd");
    let to_abs = Posix.resolve(&[&to], "/cwd");
    prop_assert_eq!(Posix.resolve(&[&from_abs, &rel], "/cwd"), to_abs);
  }

  #[test]
  fn posix_format_of_parse_reproduces_normalized_paths(path in posix_path()) {
    let normalized = Posix.normalize(&path);
    let parsed = Posix.parse(&normalized);
    prop_assume!(!normalized.ends_with('/') || parsed.base.is_empty());
    prop_assert_eq!(Posix.format(&parsed), normalized);
  }

  #[test]
  fn windows_format_of_parse_reproduces_normalized_paths(path in windows_backslash_path()) {
    let normalized = Windows.normalize(&path);
    let parsed = Windows.parse(&normalized);
    prop_assume!(!normalized.ends_with('\\') || parsed.base.is_empty());
    prop_assert_eq!(Windows.format(&parsed), normalized);
  }
}
