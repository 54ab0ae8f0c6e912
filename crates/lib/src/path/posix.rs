//! POSIX path grammar: `/` separates segments and roots every absolute path.

use super::PathGrammar;
use super::common::{final_segment, normalize_segments, split_extension, strip_suffix, trim_dir};
use super::parsed::{ParsedPath, format_with};

/// Segment separator.
pub const SEP: char = '/';

/// `PATH` list delimiter.
pub const DELIMITER: char = ':';

fn is_sep(b: u8) -> bool {
  b == b'/'
}

/// The POSIX grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Posix;

impl PathGrammar for Posix {
  fn sep(&self) -> char {
    SEP
  }

  fn delimiter(&self) -> char {
    DELIMITER
  }

  fn basename(&self, path: &str, suffix: Option<&str>) -> String {
    match final_segment(path, 0, is_sep) {
      Some((start, end)) => strip_suffix(path, &path[start..end], suffix).to_string(),
      None => String::new(),
    }
  }

  fn dirname(&self, path: &str) -> String {
    let bytes = path.as_bytes();
    if bytes.is_empty() {
      return ".".to_string();
    }

    let has_root = bytes[0] == b'/';
    let mut end = None;
    let mut matched_slash = true;
    for i in (1..bytes.len()).rev() {
      if is_sep(bytes[i]) {
        if !matched_slash {
          end = Some(i);
          break;
        }
      } else {
        matched_slash = false;
      }
    }

    match end {
      None if has_root => "/".to_string(),
      None => ".".to_string(),
      Some(1) if has_root => "//".to_string(),
      Some(end) => path[..end].to_string(),
    }
  }

  fn extname(&self, path: &str) -> String {
    match final_segment(path, 0, is_sep) {
      Some((start, end)) => split_extension(&path[start..end]).1.to_string(),
      None => String::new(),
    }
  }

  fn format(&self, parsed: &ParsedPath) -> String {
    format_with(SEP, is_sep, parsed)
  }

  fn parse(&self, path: &str) -> ParsedPath {
    let mut parsed = ParsedPath::default();
    if path.is_empty() {
      return parsed;
    }

    let root_end = if self.is_absolute(path) { 1 } else { 0 };
    parsed.root = path[..root_end].to_string();

    match final_segment(path, root_end, is_sep) {
      Some((start, end)) => {
        let base = &path[start..end];
        let (name, ext) = split_extension(base);
        parsed.base = base.to_string();
        parsed.name = name.to_string();
        parsed.ext = ext.to_string();
        parsed.dir = if start > root_end {
          trim_dir(&path[..start - 1], root_end, is_sep).to_string()
        } else {
          parsed.root.clone()
        };
      }
      None => parsed.dir = parsed.root.clone(),
    }

    parsed
  }

  fn is_absolute(&self, path: &str) -> bool {
    path.starts_with(SEP)
  }

  fn join(&self, segments: &[&str]) -> String {
    let joined = segments
      .iter()
      .filter(|segment| !segment.is_empty())
      .copied()
      .collect::<Vec<_>>()
      .join("/");

    if joined.is_empty() {
      return ".".to_string();
    }
    self.normalize(&joined)
  }

  fn normalize(&self, path: &str) -> String {
    if path.is_empty() {
      return ".".to_string();
    }

    let is_absolute = self.is_absolute(path);
    let trailing_separator = path.ends_with(SEP);

    let mut normalized = normalize_segments(path, !is_absolute, SEP, is_sep);
    if normalized.is_empty() {
      if is_absolute {
        return "/".to_string();
      }
      return if trailing_separator { "./" } else { "." }.to_string();
    }
    if trailing_separator {
      normalized.push(SEP);
    }

    if is_absolute {
      format!("/{normalized}")
    } else {
      normalized
    }
  }

  fn relative(&self, from: &str, to: &str, cwd: &str) -> String {
    if from == to {
      return String::new();
    }

    let from = self.resolve(&[from], cwd);
    let to = self.resolve(&[to], cwd);
    if from == to {
      return String::new();
    }

    // `resolve` always yields absolute paths; compare after the leading `/`.
    let from_bytes = from.as_bytes();
    let to_bytes = to.as_bytes();
    let from_start = 1;
    let from_end = from_bytes.len();
    let from_len = from_end - from_start;
    let to_start = 1;
    let to_len = to_bytes.len() - to_start;

    let length = from_len.min(to_len);
    let mut last_common_sep: isize = -1;
    let mut i = 0;
    while i < length {
      let from_code = from_bytes[from_start + i];
      if from_code != to_bytes[to_start + i] {
        break;
      } else if is_sep(from_code) {
        last_common_sep = i as isize;
      }
      i += 1;
    }

    if i == length {
      if to_len > length {
        if is_sep(to_bytes[to_start + i]) {
          // `from` is an exact prefix directory of `to`
          return to[to_start + i + 1..].to_string();
        }
        if i == 0 {
          // `from` is the root
          return to[to_start + i..].to_string();
        }
      } else if from_len > length {
        if is_sep(from_bytes[from_start + i]) {
          last_common_sep = i as isize;
        } else if i == 0 {
          last_common_sep = 0;
        }
      }
    }

    let mut out = String::new();
    let walk_start = (from_start as isize + last_common_sep + 1) as usize;
    for j in walk_start..=from_end {
      if j == from_end || is_sep(from_bytes[j]) {
        if !out.is_empty() {
          out.push(SEP);
        }
        out.push_str("..");
      }
    }

    let rest_start = (to_start as isize + last_common_sep) as usize;
    format!("{out}{}", &to[rest_start..])
  }

  fn resolve(&self, segments: &[&str], cwd: &str) -> String {
    let mut resolved = String::new();

    for segment in segments.iter().rev().copied().chain(std::iter::once(cwd)) {
      if segment.is_empty() {
        continue;
      }
      resolved = if resolved.is_empty() {
        segment.to_string()
      } else {
        format!("{segment}/{resolved}")
      };
      if self.is_absolute(segment) {
        break;
      }
    }

    // A relative cwd counts as rooted at `/`.
    format!("/{}", normalize_segments(&resolved, false, SEP, is_sep))
  }

  fn to_namespaced_path(&self, path: &str, _cwd: &str) -> String {
    path.to_string()
  }
}
